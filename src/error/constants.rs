use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "E0000", "internal server error");
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    "E0001",
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "E0002", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "E0003",
    "missing or wrong content-type"
);
const_error!(
    JSON_VALIDATE_INVALID,
    UNPROCESSABLE_ENTITY,
    "E0004",
    "invalid data"
);
const_error!(
    JSON_DESERIALIZE,
    INTERNAL_SERVER_ERROR,
    "E0005",
    "failed to deserialize json"
);
const_error!(
    DATABASE_ERROR,
    INTERNAL_SERVER_ERROR,
    "E0006",
    "database error"
);
const_error!(
    BILLING_ERROR,
    BAD_GATEWAY,
    "E0007",
    "billing provider error"
);
const_error!(INVALID_QUERY, BAD_REQUEST, "E0008", "invalid query string");
const_error!(
    INVALID_PATH,
    BAD_REQUEST,
    "E0009",
    "invalid path parameter"
);

const_error!(
    COULD_NOT_GET_CLAIMS,
    UNAUTHORIZED,
    "E0010",
    "could not get claims"
);
const_error!(JWT_INVALID_TOKEN, UNAUTHORIZED, "E0011", "invalid token");
const_error!(
    FORBIDDEN_ROLE,
    FORBIDDEN,
    "E0012",
    "this action is not available for your role"
);
const_error!(
    SUBSCRIPTION_REQUIRED,
    PAYMENT_REQUIRED,
    "E0013",
    "an active subscription is required"
);

const_error!(EMAIL_TAKEN, CONFLICT, "E0020", "email is already registered");
const_error!(
    INVALID_CREDENTIALS,
    UNAUTHORIZED,
    "E0021",
    "invalid email or password"
);
const_error!(INVALID_TOKEN, BAD_REQUEST, "E0022", "invalid or expired token");
const_error!(
    ADMIN_REGISTRATION,
    FORBIDDEN,
    "E0023",
    "admin accounts cannot be registered"
);
const_error!(
    MISSING_PLAYER_FIELDS,
    UNPROCESSABLE_ENTITY,
    "E0024",
    "players need a position and a graduation year"
);
const_error!(USER_NOT_FOUND, NOT_FOUND, "E0025", "user not found");

const_error!(COLLEGE_NOT_FOUND, NOT_FOUND, "E0030", "college not found");
const_error!(COLLEGE_EXISTS, CONFLICT, "E0031", "college already exists");
const_error!(
    COLLEGE_IN_USE,
    CONFLICT,
    "E0032",
    "college is referenced by a profile"
);

const_error!(PROFILE_NOT_FOUND, NOT_FOUND, "E0040", "profile not found");
const_error!(PLAYER_NOT_FOUND, NOT_FOUND, "E0041", "player not found");

const_error!(FAVORITE_EXISTS, CONFLICT, "E0050", "player is already a favorite");
const_error!(FAVORITE_NOT_FOUND, NOT_FOUND, "E0051", "favorite not found");

const_error!(
    EVALUATION_NOT_FOUND,
    NOT_FOUND,
    "E0060",
    "evaluation not found"
);
const_error!(
    NOT_SAME_COLLEGE,
    FORBIDDEN,
    "E0061",
    "the player does not attend your college"
);
const_error!(
    NOT_EVALUATION_AUTHOR,
    FORBIDDEN,
    "E0062",
    "only the author can edit an evaluation"
);
const_error!(
    EVALUATION_CONFLICT,
    CONFLICT,
    "E0063",
    "another evaluation of this player was saved at the same time"
);

const_error!(PLAN_NOT_FOUND, NOT_FOUND, "E0070", "plan not found");
const_error!(
    PLAN_NOT_AVAILABLE,
    BAD_REQUEST,
    "E0071",
    "plan is not available"
);
const_error!(
    ALREADY_SUBSCRIBED,
    CONFLICT,
    "E0072",
    "already subscribed"
);
const_error!(
    SUBSCRIPTION_NOT_FOUND,
    NOT_FOUND,
    "E0073",
    "no active subscription"
);
const_error!(
    INVALID_SIGNATURE,
    BAD_REQUEST,
    "E0074",
    "invalid webhook signature"
);
