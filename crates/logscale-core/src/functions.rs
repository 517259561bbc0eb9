//! Reserved function names.
//!
//! A bare occurrence of one of these names is only valid in call position
//! (`count()`) or as a field name (`count=3`); as free text it must be quoted.
//! Namespaced entries (`text:contains`) are matched on the full colon-joined
//! name.

/// Bumped whenever names are added to or removed from [`RESERVED_FUNCTIONS`].
pub const CATALOG_VERSION: u32 = 1;

pub static RESERVED_FUNCTIONS: &[&str] = &[
    // aggregation
    "accumulate",
    "avg",
    "bucket",
    "collect",
    "count",
    "counterAsRate",
    "fieldstats",
    "groupBy",
    "head",
    "linReg",
    "max",
    "min",
    "partition",
    "percentage",
    "percentile",
    "range",
    "sample",
    "selectFromMax",
    "selectFromMin",
    "selectLast",
    "series",
    "session",
    "slidingTimeWindow",
    "slidingWindow",
    "sort",
    "stats",
    "stdDev",
    "sum",
    "tail",
    "timeChart",
    "top",
    "window",
    // events and fields
    "coalesce",
    "concat",
    "concatArray",
    "copyEvent",
    "createEvents",
    "default",
    "drop",
    "dropEvent",
    "eval",
    "eventFieldCount",
    "eventInternals",
    "eventSize",
    "fieldset",
    "format",
    "getField",
    "if",
    "length",
    "lower",
    "lowercase",
    "rename",
    "replace",
    "round",
    "select",
    "setField",
    "split",
    "splitString",
    "table",
    "transpose",
    "upper",
    // filtering and matching
    "cidr",
    "hashMatch",
    "in",
    "join",
    "match",
    "regex",
    "selfJoin",
    "selfJoinFilter",
    "test",
    "wildcard",
    "correlate",
    "defineTable",
    "readFile",
    "neighbor",
    // parsing
    "findTimestamp",
    "kvParse",
    "parseCEF",
    "parseCsv",
    "parseFixedWidth",
    "parseHexString",
    "parseInt",
    "parseJson",
    "parseLEEF",
    "parseTimestamp",
    "parseUri",
    "parseUrl",
    "parseXml",
    // encoding and hashing
    "base64Decode",
    "base64Encode",
    "hash",
    "hashRewrite",
    "shannonEntropy",
    "stripAnsiCodes",
    "tokenHash",
    "urlDecode",
    "urlEncode",
    "writeJson",
    // time
    "duration",
    "end",
    "formatDuration",
    "formatTime",
    "now",
    "setTimeInterval",
    "start",
    // network and geo
    "asn",
    "communityId",
    "geohash",
    "ipLocation",
    "rdns",
    "subnet",
    "worldMap",
    "sankey",
    "callFunction",
    // namespaced
    "array:append",
    "array:contains",
    "array:dedup",
    "array:drop",
    "array:eval",
    "array:exists",
    "array:filter",
    "array:intersection",
    "array:length",
    "array:reduceAll",
    "array:reduceColumn",
    "array:reduceRow",
    "array:regex",
    "array:rename",
    "array:sort",
    "array:union",
    "bitfield:extractFlags",
    "bitfield:extractFlagsAsArray",
    "bitfield:extractFlagsAsString",
    "crypto:md5",
    "crypto:sha1",
    "crypto:sha256",
    "explain:asTable",
    "geography:distance",
    "ioc:lookup",
    "json:prettyPrint",
    "math:abs",
    "math:arccos",
    "math:arcsin",
    "math:arctan",
    "math:arctan2",
    "math:ceil",
    "math:cos",
    "math:cosh",
    "math:deg2rad",
    "math:exp",
    "math:expm1",
    "math:floor",
    "math:log",
    "math:log10",
    "math:log1p",
    "math:log2",
    "math:mod",
    "math:pow",
    "math:rad2deg",
    "math:sin",
    "math:sinh",
    "math:sqrt",
    "math:tan",
    "math:tanh",
    "objectArray:eval",
    "objectArray:exists",
    "text:contains",
    "text:endsWith",
    "text:length",
    "text:positionOf",
    "text:startsWith",
    "text:substring",
    "time:dayOfMonth",
    "time:dayOfWeek",
    "time:dayOfWeekName",
    "time:dayOfYear",
    "time:hour",
    "time:millisecond",
    "time:minute",
    "time:month",
    "time:monthName",
    "time:second",
    "time:weekOfYear",
    "time:year",
    "unit:convert",
    "xml:prettyPrint",
];

/// Whether `name` is a reserved function name. Case-sensitive.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_FUNCTIONS.contains(&name)
}
