//! Template constants for the generated application and DDL
//!
//! Slots are handlebars placeholders; HTML escaping is disabled by the
//! renderer, so values land in the output verbatim. The generated language
//! is Python (Streamlit-in-Snowflake), which never uses doubled braces, so
//! the payload text cannot collide with handlebars syntax.

/// Shared preamble of every generated app: imports, page setup, the
/// explicit application context, and the parameterized insert path.
///
/// The row timestamp is emitted as code evaluated when the generated app
/// runs, never as a literal, so rendering is deterministic.
pub const APP_PREAMBLE: &str = r#"# Import python packages
import streamlit as st
import pandas as pd
from dataclasses import dataclass
from datetime import datetime
from snowflake.snowpark.context import get_active_session
from snowflake.snowpark.functions import col

# Page configurations
st.set_page_config(layout='wide')

# Variables for customization
source_table_name = "{{source_table}}"
target_table_name = "{{target_table}}"
non_editable_columns = {{disabled_columns_py}}


@dataclass
class AppContext:
    """Session handle and acting-user identity, threaded through every helper."""
    session: object
    user_name: str


def build_context():
    session = get_active_session()
    user_name = st.experimental_user.get("user_name", "{{fallback_user}}")
    return AppContext(session=session, user_name=user_name)


ctx = build_context()
{{#if welcome}}
st.write(f"Welcome, {ctx.user_name}!")
{{/if}}

def get_column_names(ctx, table_name):
    table = ctx.session.table(table_name)
    return [field.name for field in table.schema.fields]


def build_insert_statements(df, target_table):
    columns = ', '.join([f'"{c}"' for c in df.columns] + ['"DATE_MODIFIED"'])
    placeholders = ', '.join(['?'] * (len(df.columns) + 1))
    sql = f'INSERT INTO {target_table} ({columns}) VALUES ({placeholders})'
    date_modified = datetime.now().strftime('%Y-%m-%d %H:%M:%S')
    statements = []
    for _, row in df.iterrows():
        params = [None if pd.isna(value) else value for value in row]
        params.append(date_modified)
        statements.append((sql, params))
    return statements


def update_target_table(ctx, df, target_table):
    df['USER_ID'] = ctx.user_name
    for sql, params in build_insert_statements(df, target_table):
        ctx.session.sql(sql, params=params).collect()
"#;

/// Body for the table-edit variant: per-column filters over distinct
/// values, an editable grid with the configured columns locked, and one
/// parameterized insert per edited row on submit.
pub const TABLE_EDIT_BODY: &str = r#"

def get_distinct_values(ctx, table, column):
    df = ctx.session.table(table)
    distinct_values = df.select(col(column)).distinct().to_pandas()
    return distinct_values[column].tolist()


def get_filtered_data(ctx, table, filters):
    df = ctx.session.table(table)
    for filter_column, filter_values in filters.items():
        df = df.filter(col(filter_column).isin(filter_values))
    return df.to_pandas()


# Columns offered as filters to the end user
selected_columns = {{filter_columns_py}}

filters = {}
for column in selected_columns:
    distinct_values = get_distinct_values(ctx, source_table_name, column)
    selected_values = st.multiselect(f"Select values for {column}", distinct_values)
    if selected_values:
        filters[column] = selected_values

if filters:
    filtered_df = get_filtered_data(ctx, source_table_name, filters)
else:
    filtered_df = ctx.session.table(source_table_name).to_pandas()

if 'NOTES' not in filtered_df.columns:
    filtered_df['NOTES'] = ""
if 'EXCLUDE' not in filtered_df.columns:
    filtered_df['EXCLUDE'] = False

if non_editable_columns:
    edited_df = st.data_editor(filtered_df, num_rows="dynamic", disabled=non_editable_columns)
else:
    edited_df = st.data_editor(filtered_df, num_rows="dynamic")

if st.button("Submit"):
    st.write("The following rows will be written to the target table:")
    st.write(edited_df)
    update_target_table(ctx, edited_df, target_table_name)
    st.success(f"Data written to {target_table_name}")
"#;

/// Body for the form-collection variant: one widget per authored field,
/// wrapped in a form block, reusing the shared insert path on submit.
pub const FORM_COLLECT_BODY: &str = r#"

with st.form("submission_form"):
    st.write("Please fill out the form")
    form_data = {}
{{#each fields}}
    form_data["{{name}}"] = {{widget}}
{{/each}}
    form_data["USER_ID"] = ctx.user_name
    submitted = st.form_submit_button("Submit")

if submitted:
    form_df = pd.DataFrame([form_data])
    update_target_table(ctx, form_df, target_table_name)
    st.success("Form data submitted successfully!")
"#;

/// Target-table creation statement, displayed for the user to run in a
/// worksheet. The column block ends with a trailing separator when
/// non-empty, so the four audit columns always close the list.
pub const CREATE_TABLE_DDL: &str = r"-- Run this statement in a warehouse worksheet to create the target table
CREATE OR REPLACE TABLE {{target_table}} (
    {{column_block}}EXCLUDE BOOLEAN,
    USER_ID VARCHAR,
    NOTES STRING,
    DATE_MODIFIED TIMESTAMP_NTZ(9)
);
";
