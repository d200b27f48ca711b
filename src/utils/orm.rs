use sea_orm::{ActiveValue, Value};

pub fn set_option<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

/// Escape character of [`contains_pattern`]. It must stay a character that no
/// backend escapes inside string literals.
pub const LIKE_ESCAPE: char = '!';

/// `LIKE` pattern matching `needle` anywhere, with wildcards in it escaped.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');

    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_option_leaves_missing_values_untouched() {
        assert_eq!(set_option(Some(3)), ActiveValue::Set(3));
        assert_eq!(set_option::<i32>(None), ActiveValue::NotSet);
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("Iowa"), "%iowa%");
        assert_eq!(contains_pattern("50%_off!"), "%50!%!_off!!%");
    }
}
