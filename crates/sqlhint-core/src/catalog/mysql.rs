use super::CatalogEntry as E;

pub(super) const DATA_TYPES: &[E] = &[
    E::with_insert(
        "char",
        "A fixed length string. The size parameter specifies the column length in characters (0 to 255, default 1)",
        "char()",
    ),
    E::with_insert(
        "varchar",
        "A variable length string. The size parameter specifies the maximum column length in characters (0 to 65535)",
        "varchar()",
    ),
    E::with_insert(
        "binary",
        "Equal to CHAR(), but stores binary byte strings",
        "binary()",
    ),
    E::with_insert(
        "varbinary",
        "Equal to VARCHAR(), but stores binary byte strings",
        "varbinary()",
    ),
    E::new("tinyblob", "For BLOBs (Binary Large OBjects). Max length: 255 bytes"),
    E::new("tinytext", "Holds a string with a maximum length of 255 characters"),
    E::with_insert("text", "Holds a string with a maximum length of 65,535 bytes", "text()"),
    E::with_insert(
        "blob",
        "For BLOBs (Binary Large OBjects). Holds up to 65,535 bytes of data",
        "blob()",
    ),
    E::new(
        "mediumblob",
        "For BLOBs (Binary Large OBjects). Holds up to 16,777,215 bytes of data",
    ),
    E::new("mediumtext", "Holds a string with a maximum length of 16,777,215 characters"),
    E::new(
        "longblob",
        "For BLOBs (Binary Large OBjects). Holds up to 4,294,967,295 bytes of data",
    ),
    E::new("longtext", "Holds a string with a maximum length of 4,294,967,295 characters"),
    E::with_insert(
        "enum",
        "A string object that can have only one value, chosen from a list of possible values",
        "enum()",
    ),
    E::with_insert(
        "set",
        "A string object that can have 0 or more values, chosen from a list of possible values",
        "set()",
    ),
    E::with_insert("bit", "A bit-value type with 1 to 64 bits per value", "bit()"),
    E::with_insert("tinyint", "A very small integer (-128 to 127)", "tinyint()"),
    E::new("bool", "Zero is considered as false, nonzero values are considered as true"),
    E::new("boolean", "Equal to BOOL"),
    E::with_insert("smallint", "A small integer (-32768 to 32767)", "smallint()"),
    E::new("mediumint", "A medium integer (-8388608 to 8388607)"),
    E::with_insert("int", "A medium integer (-2147483648 to 2147483647)", "int()"),
    E::with_insert("integer", "Equal to INT(size)", "integer()"),
    E::with_insert("bigint", "A large integer", "bigint()"),
    E::with_insert("float", "A floating point number", "float()"),
    E::with_insert("double", "A normal-size floating point number", "double()"),
    E::new("double precision", "Equal to DOUBLE"),
    E::with_insert(
        "decimal",
        "An exact fixed-point number. The maximum number for size is 65 and for d is 30",
        "decimal(size,d)",
    ),
    E::with_insert("dec", "Equal to DECIMAL(size,d)", "dec()"),
    E::new("date", "A date. Format: YYYY-MM-DD"),
    E::with_insert("datetime", "A date and time combination. Format: YYYY-MM-DD hh:mm:ss", "datetime()"),
    E::with_insert(
        "timestamp",
        "A timestamp stored as the number of seconds since the Unix epoch",
        "timestamp()",
    ),
    E::with_insert("time", "A time. Format: hh:mm:ss", "time()"),
    E::new("year", "A year in four-digit format"),
    E::new("json", "A native JSON document"),
];
