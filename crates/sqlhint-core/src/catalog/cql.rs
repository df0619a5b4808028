//! Cassandra Query Language vocabulary.

use super::CatalogEntry as E;

pub(super) const KEYWORDS: &[E] = &[
    E::new("ADD", "Adds a column to an existing table"),
    E::new("ALLOW FILTERING", "Allows a query that requires server-side filtering"),
    E::new("ALTER", "Changes a keyspace, table or type"),
    E::new("ALTER KEYSPACE", "Changes the replication or durable writes of a keyspace"),
    E::new("ALTER TABLE", "Adds, drops or renames columns, or changes table options"),
    E::new("AND", "Combines conditions in a WHERE clause"),
    E::new("APPLY BATCH", "Ends a batch of statements"),
    E::new("AS", "Renames a selected column"),
    E::new("ASC", "Sorts clustering columns in ascending order"),
    E::new("BEGIN BATCH", "Starts a batch of statements"),
    E::new("CLUSTERING ORDER BY", "Sets the on-disk order of clustering columns"),
    E::new("CONTAINS", "Filters on a value of a collection column"),
    E::new("CONTAINS KEY", "Filters on a key of a map column"),
    E::new("CREATE", "Creates a keyspace, table, index, type or view"),
    E::new("CREATE INDEX", "Creates a secondary index on a column"),
    E::new("CREATE KEYSPACE", "Creates a new keyspace"),
    E::new("CREATE MATERIALIZED VIEW", "Creates a view maintained from a base table"),
    E::new("CREATE TABLE", "Creates a new table in the keyspace"),
    E::new("CREATE TYPE", "Creates a user-defined type"),
    E::new("DELETE", "Deletes rows or columns from a table"),
    E::new("DESC", "Sorts clustering columns in descending order"),
    E::new("DISTINCT", "Selects only distinct partition keys"),
    E::new("DROP", "Deletes a keyspace, table, index, type or view"),
    E::new("DROP INDEX", "Deletes a secondary index"),
    E::new("DROP KEYSPACE", "Deletes a keyspace and all its tables"),
    E::new("DROP TABLE", "Deletes a table and all its data"),
    E::new("FROM", "Specifies which table to select or delete data from"),
    E::new("IF EXISTS", "Only applies the statement when the target exists"),
    E::new("IF NOT EXISTS", "Only applies the statement when the target does not exist"),
    E::new("IN", "Matches any value in a list"),
    E::new("INSERT", "Inserts or upserts a row in a table"),
    E::new("INTO", "Names the target table of an INSERT"),
    E::new("KEYSPACE", "A namespace that defines data replication"),
    E::new("LIMIT", "Specifies the number of rows to return"),
    E::new("ORDER BY", "Orders rows within a partition by clustering columns"),
    E::new("PER PARTITION LIMIT", "Limits the number of rows returned per partition"),
    E::new("PRIMARY KEY", "Declares the partition key and clustering columns"),
    E::new("SELECT", "Selects data from a table"),
    E::new("SET", "Specifies which columns and values should be updated"),
    E::new("TABLE", "Creates, alters or deletes a table"),
    E::new("TRUNCATE", "Removes all data from a table"),
    E::new("TTL", "Sets the time to live of inserted or updated values"),
    E::new("UPDATE", "Updates or upserts columns of a row"),
    E::new("USE", "Sets the current keyspace"),
    E::new("USING", "Sets the TTL or TIMESTAMP of a write"),
    E::new("VALUES", "Specifies the values of an INSERT statement"),
    E::new("WHERE", "Filters rows by primary key or indexed columns"),
    E::new("WITH", "Sets table or keyspace options"),
];

pub(super) const OPERATORS: &[&str] = &[
    "AND", "IN", "CONTAINS", "CONTAINS KEY", "IS", "NOT", "NULL", "=", "!=", "<", "<=", ">",
    ">=",
];

pub(super) const FUNCTIONS: &[E] = &[
    E::with_insert("AVG", "Returns the average value", "AVG()"),
    E::with_insert("COUNT", "Returns the number of rows", "COUNT()"),
    E::with_insert("MAX", "Returns the largest value", "MAX()"),
    E::with_insert("MIN", "Returns the smallest value", "MIN()"),
    E::with_insert("NOW", "Returns a new unique timeuuid", "NOW()"),
    E::with_insert("SUM", "Returns the sum", "SUM()"),
    E::with_insert("TOKEN", "Returns the partition token of a key", "TOKEN()"),
    E::with_insert("TTL", "Returns the remaining time to live of a column", "TTL()"),
    E::with_insert("UUID", "Returns a new random uuid", "UUID()"),
    E::with_insert("WRITETIME", "Returns the write timestamp of a column", "WRITETIME()"),
    E::with_insert("toDate", "Converts a timestamp or timeuuid to a date", "toDate()"),
    E::with_insert(
        "toTimestamp",
        "Converts a date or timeuuid to a timestamp",
        "toTimestamp()",
    ),
];

pub(super) const DATA_TYPES: &[E] = &[
    E::new("ascii", "US-ASCII character string"),
    E::new("bigint", "64-bit signed long"),
    E::new("blob", "Arbitrary bytes"),
    E::new("boolean", "true or false"),
    E::new("counter", "64-bit distributed counter"),
    E::new("date", "A date without a time"),
    E::new("decimal", "Variable-precision decimal"),
    E::new("double", "64-bit IEEE-754 floating point"),
    E::new("duration", "A duration with nanosecond precision"),
    E::new("float", "32-bit IEEE-754 floating point"),
    E::with_insert("frozen", "Serializes a collection or UDT as a single value", "frozen<>"),
    E::new("inet", "IPv4 or IPv6 address"),
    E::new("int", "32-bit signed int"),
    E::with_insert("list", "Ordered collection of elements", "list<>"),
    E::with_insert("map", "Collection of key-value pairs", "map<, >"),
    E::with_insert("set", "Sorted collection of unique elements", "set<>"),
    E::new("smallint", "16-bit signed int"),
    E::new("text", "UTF-8 encoded string"),
    E::new("time", "A time of day with nanosecond precision"),
    E::new("timestamp", "Date and time with millisecond precision"),
    E::new("timeuuid", "Version 1 UUID"),
    E::new("tinyint", "8-bit signed int"),
    E::with_insert("tuple", "Fixed-length set of typed positional fields", "tuple<>"),
    E::new("uuid", "Universally unique identifier"),
    E::new("varchar", "UTF-8 encoded string"),
    E::new("varint", "Arbitrary-precision integer"),
];

pub(super) const SNIPPETS: &[E] = &[
    E::with_insert("col", "new column definition", "col text"),
    E::with_insert(
        "del",
        "delete rows from a table",
        "delete from [table_name] where [condition];",
    ),
    E::with_insert("ins", "insert a row into a table", "insert into  () values ();"),
    E::with_insert(
        "ks",
        "new keyspace definition",
        "create keyspace new_keyspace\nwith replication = {'class': 'SimpleStrategy', 'replication_factor': 1};\n",
    ),
    E::with_insert("lim", "select first N rows from a table", "select * from limit ;"),
    E::with_insert("sel", "select all rows from a table", "select * from ;"),
    E::with_insert(
        "selw",
        "select specific rows from a table",
        "select * from where ;",
    ),
    E::with_insert(
        "tab",
        "new table definition",
        "create table new_table\n(\n  id uuid primary key\n);\n",
    ),
    E::with_insert("upd", "update values in a table", "update set where;"),
];
