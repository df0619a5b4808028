//! PostgreSQL vocabulary. MySQL reuses everything here except data types.

use super::CatalogEntry as E;

pub(super) const KEYWORDS: &[E] = &[
    E::new("ADD", "Adds a column in an existing table"),
    E::new("ADD CONSTRAINT", "Adds a constraint after a table is already created"),
    E::new("ALL", "Returns true if all of the subquery values meet the condition"),
    E::new(
        "ALTER",
        "Adds, deletes, or modifies columns in a table, or changes the data type of a column",
    ),
    E::new("ALTER COLUMN", "Changes the data type or default of a column"),
    E::new("AND", "Only includes rows where both conditions are true"),
    E::new("AS", "Renames a column or table with an alias"),
    E::new("ASC", "Sorts the result set in ascending order"),
    E::new("BACKUP DATABASE", "Creates a back up of an existing database"),
    E::new("BETWEEN", "Selects values within a given range"),
    E::new("CASE", "Creates different outputs based on conditions"),
    E::new("CHECK", "A constraint that limits the value that can be placed in a column"),
    E::new("COLUMN", "Changes the data type of a column or deletes a column in a table"),
    E::new("CONSTRAINT", "Adds or deletes a constraint"),
    E::new("CREATE", "Creates a database, index, view, table, or procedure"),
    E::new("CREATE DATABASE", "Creates a new SQL database"),
    E::new("CREATE INDEX", "Creates an index on a table (allows duplicate values)"),
    E::new("CREATE OR REPLACE VIEW", "Updates a view"),
    E::new("CREATE PROCEDURE", "Creates a stored procedure"),
    E::new("CREATE TABLE", "Creates a new table in the database"),
    E::new("CREATE UNIQUE INDEX", "Creates a unique index on a table (no duplicate values)"),
    E::new("CREATE VIEW", "Creates a view based on the result set of a SELECT statement"),
    E::new("DATABASE", "Creates or deletes an SQL database"),
    E::new("DEFAULT", "A constraint that provides a default value for a column"),
    E::new("DELETE", "Deletes rows from a table"),
    E::new("DESC", "Sorts the result set in descending order"),
    E::new("DISTINCT", "Selects only distinct (different) values"),
    E::new("DROP", "Deletes a column, constraint, database, index, table, or view"),
    E::new("DROP COLUMN", "Deletes a column in a table"),
    E::new("DROP CONSTRAINT", "Deletes a UNIQUE, PRIMARY KEY, FOREIGN KEY, or CHECK constraint"),
    E::new("DROP DATABASE", "Deletes an existing SQL database"),
    E::new("DROP DEFAULT", "Deletes a DEFAULT constraint"),
    E::new("DROP INDEX", "Deletes an index in a table"),
    E::new("DROP TABLE", "Deletes an existing table in the database"),
    E::new("DROP VIEW", "Deletes a view"),
    E::new("EXEC", "Executes a stored procedure"),
    E::new("EXISTS", "Tests for the existence of any record in a subquery"),
    E::new("FOREIGN KEY", "A constraint that is a key used to link two tables together"),
    E::new("FROM", "Specifies which table to select or delete data from"),
    E::new(
        "FULL OUTER JOIN",
        "Returns all rows when there is a match in either left table or right table",
    ),
    E::new("GROUP BY", "Groups the result set (used with aggregate functions)"),
    E::new("HAVING", "Used instead of WHERE with aggregate functions"),
    E::new("IN", "Allows you to specify multiple values in a WHERE clause"),
    E::new("INDEX", "Creates or deletes an index in a table"),
    E::new("INNER JOIN", "Returns rows that have matching values in both tables"),
    E::new("INSERT", "Inserts new rows in a table"),
    E::new("INSERT INTO SELECT", "Copies data from one table into another table"),
    E::new("INTO", "Names the target table of an INSERT"),
    E::new("IS NOT NULL", "Tests for non-empty values"),
    E::new("IS NULL", "Tests for empty values"),
    E::new("JOIN", "Joins tables"),
    E::new("LEFT JOIN", "Returns all rows from the left table and the matching rows from the right"),
    E::new("LIKE", "Searches for a specified pattern in a column"),
    E::new("LIMIT", "Specifies the number of records to return in the result set"),
    E::new("NOT NULL", "A constraint that enforces a column to not accept NULL values"),
    E::new("ON", "Specifies the join condition"),
    E::new("OR", "Includes rows where either condition is true"),
    E::new("ORDER BY", "Sorts the result set in ascending or descending order"),
    E::new("PRIMARY KEY", "A constraint that uniquely identifies each record in a table"),
    E::new("RIGHT JOIN", "Returns all rows from the right table and the matching rows from the left"),
    E::new("SELECT", "Selects data from a database"),
    E::new("SET", "Specifies which columns and values should be updated"),
    E::new("TABLE", "Creates, alters or deletes a table"),
    E::new("TRUNCATE TABLE", "Deletes the data inside a table, but not the table itself"),
    E::new("TYPE", "Changes the data type of a column"),
    E::new("UNION", "Combines the result set of two or more SELECT statements"),
    E::new("UNIQUE", "A constraint that ensures that all values in a column are unique"),
    E::new("UPDATE", "Updates existing rows in a table"),
    E::new("VALUES", "Specifies the values of an INSERT INTO statement"),
    E::new("WHERE", "Filters a result set to include only records that fulfill a condition"),
];

pub(super) const OPERATORS: &[&str] = &[
    // Logical
    "ALL", "AND", "ANY", "BETWEEN", "EXISTS", "IN", "LIKE", "ILIKE", "NOT", "OR", "SOME",
    // Set
    "EXCEPT", "INTERSECT", "UNION",
    // Join
    "CROSS", "FULL", "INNER", "JOIN", "LEFT", "OUTER", "RIGHT",
    // Predicates
    "IS", "NULL",
    // Comparison
    "=", "<>", "!=", "<", "<=", ">", ">=",
];

pub(super) const FUNCTIONS: &[E] = &[
    E::with_insert("AVG", "Returns the average value", "AVG()"),
    E::with_insert("COALESCE", "Returns the first non-null argument", "COALESCE()"),
    E::with_insert("COUNT", "Returns the number of rows", "COUNT()"),
    E::with_insert("FORMAT", "Formats how a field is to be displayed", "FORMAT()"),
    E::with_insert("LENGTH", "Returns the length of a text field", "LENGTH()"),
    E::with_insert("LOWER", "Converts a field to lower case", "LOWER()"),
    E::with_insert("MAX", "Returns the largest value", "MAX()"),
    E::with_insert("MIN", "Returns the smallest value", "MIN()"),
    E::with_insert("NOW", "Returns the current system date and time", "NOW()"),
    E::with_insert(
        "ROUND",
        "Rounds a numeric field to the number of decimals specified",
        "ROUND()",
    ),
    E::with_insert("SUBSTRING", "Extracts characters from a text field", "SUBSTRING()"),
    E::with_insert("SUM", "Returns the sum", "SUM()"),
    E::with_insert("UPPER", "Converts a field to upper case", "UPPER()"),
];

pub(super) const DATA_TYPES: &[E] = &[
    E::new("bigint", "Signed eight-byte integer"),
    E::new("bigserial", "Autoincrementing eight-byte integer"),
    E::new("boolean", "Logical Boolean (true/false)"),
    E::new("bytea", "Binary data (byte array)"),
    E::with_insert("char", "Fixed-length character string", "char()"),
    E::new("date", "Calendar date (year, month, day)"),
    E::new("double precision", "Double precision floating-point number (8 bytes)"),
    E::new("inet", "IPv4 or IPv6 host address"),
    E::new("integer", "Signed four-byte integer"),
    E::new("interval", "Time span"),
    E::new("json", "Textual JSON data"),
    E::new("jsonb", "Binary JSON data, decomposed"),
    E::with_insert("numeric", "Exact numeric of selectable precision", "numeric(p, s)"),
    E::new("real", "Single precision floating-point number (4 bytes)"),
    E::new("serial", "Autoincrementing four-byte integer"),
    E::new("smallint", "Signed two-byte integer"),
    E::new("text", "Variable-length character string"),
    E::new("time", "Time of day (no time zone)"),
    E::new("timestamp", "Date and time (no time zone)"),
    E::new("timestamptz", "Date and time, including time zone"),
    E::new("uuid", "Universally unique identifier"),
    E::with_insert("varchar", "Variable-length character string with limit", "varchar()"),
];

pub(super) const SNIPPETS: &[E] = &[
    E::with_insert("col", "new column definition", "col int not null"),
    E::with_insert(
        "del",
        "delete rows from a table",
        "delete from [table_name] where [condition];",
    ),
    E::with_insert("ins", "insert rows into table", "insert into  () values ();"),
    E::with_insert("lim", "select first N rows from a table", "select * from limit ;"),
    E::with_insert("sel", "select all rows from a table", "select * from ;"),
    E::with_insert(
        "selc",
        "select the number of specific rows in a table",
        "select count(*) from alias where alias.;",
    ),
    E::with_insert(
        "selw",
        "select specific rows from a table",
        "select * from alias where alias.;",
    ),
    E::with_insert(
        "tab",
        "new table definition",
        "create table new_table\n(\n  col int not null\n);\n",
    ),
    E::with_insert("upd", "update values in a table", "update set where;"),
    E::with_insert(
        "view",
        "new view definition",
        "create view new_view as\nselect *\nfrom ;\n",
    ),
];
