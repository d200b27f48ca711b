use sea_orm_migration::prelude::*;

macro_rules! drop_table {
    ($manager:expr, $entity:expr) => {
        $manager
            .drop_table(Table::drop().if_exists().table($entity).to_owned())
            .await
    };
}

pub(crate) use drop_table;

#[inline]
pub fn uuid<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column).uuid().not_null().to_owned()
}

#[inline]
pub fn string<T: IntoIden>(column: T, len: u32) -> ColumnDef {
    ColumnDef::new(column).string_len(len).not_null().to_owned()
}

#[inline]
pub fn timestamp<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}
