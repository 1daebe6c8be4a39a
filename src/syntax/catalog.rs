//! Constant catalogs of query commands, functions and keywords.
//!
//! These are process-wide immutable tables; the lexer derives its command and
//! function rules from them and the completion engine turns them into
//! suggestion items. Labels, signatures and documentation follow the query
//! language reference.

/// One entry of a command or function catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Name as it appears in a query.
    pub label: &'static str,
    /// Call signature shown next to the label.
    pub detail: Option<&'static str>,
    /// Longer description shown in the documentation panel.
    pub documentation: Option<&'static str>,
}

const fn cmd(label: &'static str, documentation: &'static str) -> CatalogEntry {
    CatalogEntry {
        label,
        detail: None,
        documentation: Some(documentation),
    }
}

const fn func(
    label: &'static str,
    detail: &'static str,
    documentation: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        label,
        detail: Some(detail),
        documentation: Some(documentation),
    }
}

/// Pipeline commands.
pub const QUERY_COMMANDS: &[CatalogEntry] = &[
    cmd("fields", "Retrieves the specified fields from log events."),
    cmd("display", "Specifies which fields to display in the query results."),
    cmd(
        "filter",
        "Filters the results of a query based on one or more conditions.",
    ),
    cmd(
        "stats",
        "Calculates aggregate statistics based on the values of log fields.",
    ),
    cmd("sort", "Sorts the retrieved log events."),
    cmd(
        "limit",
        "Specifies the number of log events returned by the query.",
    ),
    cmd(
        "parse",
        "Extracts data from a log field, creating one or more ephemeral fields that you can process further in the query.",
    ),
];

/// Numeric functions usable in filter and field expressions.
pub const NUMERIC_OPERATORS: &[CatalogEntry] = &[
    func("abs", "abs(a)", "Absolute value."),
    func(
        "ceil",
        "ceil(a)",
        "Round to ceiling (the smallest integer that is greater than the value of a).",
    ),
    func(
        "floor",
        "floor(a)",
        "Round to floor (the largest integer that is smaller than the value of a).",
    ),
    func("greatest", "greatest(a, b, ... z)", "Returns the largest value."),
    func("least", "least(a, b, ... z)", "Returns the smallest value."),
    func("log", "log(a)", "Natural logarithm."),
    func("sqrt", "sqrt(a)", "Square root."),
];

/// General-purpose functions.
pub const GENERAL_FUNCTIONS: &[CatalogEntry] = &[
    func(
        "ispresent",
        "ispresent(fieldName)",
        "Returns true if the field exists.",
    ),
    func(
        "coalesce",
        "coalesce(fieldName1, fieldName2, ... fieldNameX)",
        "Returns the first non-null value from the list.",
    ),
];

/// String functions.
pub const STRING_FUNCTIONS: &[CatalogEntry] = &[
    func(
        "isempty",
        "isempty(fieldName)",
        "Returns true if the field is missing or is an empty string.",
    ),
    func(
        "isblank",
        "isblank(fieldName)",
        "Returns true if the field is missing, an empty string, or contains only white space.",
    ),
    func(
        "concat",
        "concat(string1, string2, ... stringX)",
        "Concatenates the strings.",
    ),
    func(
        "ltrim",
        "ltrim(string1) or ltrim(string1, string2)",
        "Removes white space from the left of string1, or removes leading occurrences of string2.",
    ),
    func(
        "rtrim",
        "rtrim(string1) or rtrim(string1, string2)",
        "Removes white space from the right of string1, or removes trailing occurrences of string2.",
    ),
    func(
        "trim",
        "trim(string1) or trim(string1, string2)",
        "Removes white space from both ends of string1, or removes occurrences of string2 from both ends.",
    ),
    func(
        "strlen",
        "strlen(string)",
        "Returns the length of the string in Unicode code points.",
    ),
    func("toupper", "toupper(string)", "Converts the string to uppercase."),
    func("tolower", "tolower(string)", "Converts the string to lowercase."),
    func(
        "replace",
        "replace(string1, string2, string3)",
        "Replaces all instances of string2 in string1 with string3.",
    ),
    func(
        "strcontains",
        "strcontains(string1, string2)",
        "Returns 1 if string1 contains string2 and 0 otherwise.",
    ),
    func(
        "substr",
        "substr(string1, x) or substr(string1, x, y)",
        "Returns a substring starting at the index x, optionally limited to y characters.",
    ),
];

/// Date and time functions.
pub const DATETIME_FUNCTIONS: &[CatalogEntry] = &[
    func(
        "bin",
        "bin(period)",
        "Rounds the value of @timestamp to the given period and then truncates.",
    ),
    func(
        "datefloor",
        "datefloor(timestamp, period)",
        "Truncates the timestamp to the given period.",
    ),
    func(
        "dateceil",
        "dateceil(timestamp, period)",
        "Rounds up the timestamp to the given period and then truncates.",
    ),
    func(
        "fromMillis",
        "fromMillis(fieldName)",
        "Interprets the input field as the number of milliseconds since the Unix epoch and converts it to a timestamp.",
    ),
    func(
        "toMillis",
        "toMillis(fieldName)",
        "Converts the timestamp in the named field to the number of milliseconds since the Unix epoch.",
    ),
];

/// IP address functions.
pub const IP_FUNCTIONS: &[CatalogEntry] = &[
    func(
        "isValidIp",
        "isValidIp(fieldName)",
        "Returns true if the field is a valid v4 or v6 IP address.",
    ),
    func(
        "isValidIpV4",
        "isValidIpV4(fieldName)",
        "Returns true if the field is a valid v4 IP address.",
    ),
    func(
        "isValidIpV6",
        "isValidIpV6(fieldName)",
        "Returns true if the field is a valid v6 IP address.",
    ),
    func(
        "isIpInSubnet",
        "isIpInSubnet(fieldName, subnet)",
        "Returns true if the field is a valid v4 or v6 IP address within the specified v4 or v6 subnet.",
    ),
    func(
        "isIpv4InSubnet",
        "isIpv4InSubnet(fieldName, subnet)",
        "Returns true if the field is a valid v4 IP address within the specified v4 subnet.",
    ),
    func(
        "isIpv6InSubnet",
        "isIpv6InSubnet(fieldName, subnet)",
        "Returns true if the field is a valid v6 IP address within the specified v6 subnet.",
    ),
];

/// Aggregating functions for the `stats` command.
pub const STATS_AGGREGATION_FUNCTIONS: &[CatalogEntry] = &[
    func(
        "avg",
        "avg(NumericFieldName)",
        "The average of the values in the specified field.",
    ),
    func(
        "count",
        "count() or count(fieldName)",
        "Counts the log events.",
    ),
    func(
        "count_distinct",
        "count_distinct(fieldName)",
        "Returns the number of unique values for the field.",
    ),
    func(
        "max",
        "max(fieldName)",
        "The maximum of the values in the specified field.",
    ),
    func(
        "min",
        "min(fieldName)",
        "The minimum of the values in the specified field.",
    ),
    func(
        "pct",
        "pct(fieldName, percent)",
        "A percentile indicating the relative standing of a value in a dataset.",
    ),
    func(
        "stddev",
        "stddev(NumericFieldName)",
        "The standard deviation of the values in the specified field.",
    ),
    func(
        "sum",
        "sum(NumericFieldName)",
        "The sum of the values in the specified field.",
    ),
];

/// Non-aggregating functions for the `stats` command.
pub const STATS_NON_AGGREGATION_FUNCTIONS: &[CatalogEntry] = &[
    func(
        "earliest",
        "earliest(fieldName)",
        "Returns the value of the field from the log event with the earliest timestamp.",
    ),
    func(
        "latest",
        "latest(fieldName)",
        "Returns the value of the field from the log event with the latest timestamp.",
    ),
    func(
        "sortsFirst",
        "sortsFirst(fieldName)",
        "Returns the value of the field that sorts first in the queried logs.",
    ),
    func(
        "sortsLast",
        "sortsLast(fieldName)",
        "Returns the value of the field that sorts last in the queried logs.",
    ),
];

/// Boolean-valued functions, suggested where a condition is expected.
pub const BOOLEAN_FUNCTIONS: &[CatalogEntry] = &[
    func(
        "ispresent",
        "ispresent(fieldName)",
        "Returns true if the field exists.",
    ),
    func(
        "isempty",
        "isempty(fieldName)",
        "Returns true if the field is missing or is an empty string.",
    ),
    func(
        "isblank",
        "isblank(fieldName)",
        "Returns true if the field is missing, an empty string, or contains only white space.",
    ),
    func(
        "isValidIp",
        "isValidIp(fieldName)",
        "Returns true if the field is a valid v4 or v6 IP address.",
    ),
    func(
        "isValidIpV4",
        "isValidIpV4(fieldName)",
        "Returns true if the field is a valid v4 IP address.",
    ),
    func(
        "isValidIpV6",
        "isValidIpV6(fieldName)",
        "Returns true if the field is a valid v6 IP address.",
    ),
    func(
        "isIpInSubnet",
        "isIpInSubnet(fieldName, subnet)",
        "Returns true if the field is a valid v4 or v6 IP address within the specified v4 or v6 subnet.",
    ),
    func(
        "isIpv4InSubnet",
        "isIpv4InSubnet(fieldName, subnet)",
        "Returns true if the field is a valid v4 IP address within the specified v4 subnet.",
    ),
    func(
        "isIpv6InSubnet",
        "isIpv6InSubnet(fieldName, subnet)",
        "Returns true if the field is a valid v6 IP address within the specified v6 subnet.",
    ),
];

/// Keywords recognized by the tokenizer.
pub const KEYWORDS: &[&str] = &["as", "like", "by", "in", "desc", "asc"];

/// Functions whose parentheses accept a field name argument; cursor positions
/// inside them complete fields. Compared case-insensitively.
pub const FIELD_ARGUMENT_FUNCTIONS: &[&str] = &[
    "avg",
    "count",
    "count_distinct",
    "earliest",
    "latest",
    "sortsfirst",
    "sortslast",
    "max",
    "min",
    "pct",
    "stddev",
    "ispresent",
    "frommillis",
    "tomillis",
    "isempty",
    "isblank",
    "isvalidip",
    "isvalidipv4",
    "isvalidipv6",
    "isipinsubnet",
    "isipv4insubnet",
    "isipv6insubnet",
];

/// Catalogs suggested for `fields`, `display` and filter expressions.
pub const FIELD_AND_FILTER_FUNCTIONS: &[&[CatalogEntry]] = &[
    NUMERIC_OPERATORS,
    GENERAL_FUNCTIONS,
    STRING_FUNCTIONS,
    DATETIME_FUNCTIONS,
    IP_FUNCTIONS,
];

/// Every function catalog; drives the tokenizer's function rule.
pub const ALL_FUNCTIONS: &[&[CatalogEntry]] = &[
    NUMERIC_OPERATORS,
    GENERAL_FUNCTIONS,
    STRING_FUNCTIONS,
    DATETIME_FUNCTIONS,
    IP_FUNCTIONS,
    STATS_AGGREGATION_FUNCTIONS,
    STATS_NON_AGGREGATION_FUNCTIONS,
];

/// Check whether a function name takes a field argument.
pub fn accepts_field_argument(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    FIELD_ARGUMENT_FUNCTIONS.contains(&lowered.as_str())
}
