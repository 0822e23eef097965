//! Prisma 查询引擎错误码表（P2xxx）。

use domain::{ErrorCodeEntry, ErrorInfo, UNKNOWN_ERROR};

/// 已识别的错误码，按错误码升序排列。
static QUERY_ERRORS: [ErrorCodeEntry; 28] = [
    ErrorCodeEntry::new(
        "P2000",
        "The provided value for the column is too long for the column's type",
        400,
    ),
    ErrorCodeEntry::new(
        "P2001",
        "The record searched for in the where condition does not exist",
        404,
    ),
    ErrorCodeEntry::new("P2002", "Unique constraint failed", 409),
    ErrorCodeEntry::new("P2003", "Foreign key constraint failed", 409),
    ErrorCodeEntry::new("P2004", "A constraint failed on the database", 400),
    ErrorCodeEntry::new(
        "P2005",
        "The value stored in the database for the field is invalid for the field's type",
        400,
    ),
    ErrorCodeEntry::new("P2006", "The provided value for the field is not valid", 400),
    ErrorCodeEntry::new("P2007", "Data validation error", 400),
    ErrorCodeEntry::new("P2008", "Failed to parse the query", 400),
    ErrorCodeEntry::new("P2009", "Failed to validate the query", 400),
    ErrorCodeEntry::new("P2010", "Raw query failed", 500),
    ErrorCodeEntry::new("P2011", "Null constraint violation", 400),
    ErrorCodeEntry::new("P2012", "Missing a required value", 400),
    ErrorCodeEntry::new("P2013", "Missing a required argument", 400),
    ErrorCodeEntry::new(
        "P2014",
        "The change you are trying to make would violate the required relation",
        400,
    ),
    ErrorCodeEntry::new("P2015", "A related record could not be found", 404),
    ErrorCodeEntry::new("P2016", "Query interpretation error", 400),
    ErrorCodeEntry::new(
        "P2017",
        "The records for relation between the parent and child models are not connected",
        400,
    ),
    ErrorCodeEntry::new(
        "P2018",
        "The required connected records were not found",
        404,
    ),
    ErrorCodeEntry::new("P2019", "Input error", 400),
    ErrorCodeEntry::new("P2020", "Value out of range for the type", 400),
    ErrorCodeEntry::new(
        "P2021",
        "The table does not exist in the current database",
        404,
    ),
    ErrorCodeEntry::new(
        "P2022",
        "The column does not exist in the current database",
        404,
    ),
    ErrorCodeEntry::new("P2023", "Inconsistent column data", 400),
    ErrorCodeEntry::new(
        "P2024",
        "Timed out fetching a new connection from the pool",
        500,
    ),
    ErrorCodeEntry::new(
        "P2025",
        "An operation failed because it depends on one or more records that were required but not found",
        404,
    ),
    ErrorCodeEntry::new(
        "P2026",
        "The current database provider doesn't support a feature that the query used",
        400,
    ),
    ErrorCodeEntry::new(
        "P2027",
        "Multiple errors occurred on the database during query execution",
        500,
    ),
];

/// 完整错误码表。
pub fn entries() -> &'static [ErrorCodeEntry] {
    &QUERY_ERRORS
}

/// 按错误码精确匹配（区分大小写）。
pub fn find(code: &str) -> Option<&'static ErrorCodeEntry> {
    QUERY_ERRORS.iter().find(|entry| entry.code == code)
}

pub fn is_known(code: &str) -> bool {
    find(code).is_some()
}

/// 查表：未识别的错误码返回 `Unknown error` / 500。
pub fn lookup(code: &str) -> ErrorInfo {
    find(code).map_or(UNKNOWN_ERROR, ErrorCodeEntry::info)
}
