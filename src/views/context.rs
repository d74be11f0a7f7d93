use maud::{html, Markup};

use crate::models::{cell_text, ContextContent, DataTable};

/// A passage keeps its whitespace; a table gets its caption above it.
pub fn context(content: &ContextContent) -> Markup {
    match content {
        ContextContent::None => html! {},
        ContextContent::Text(text) => passage(text),
        ContextContent::Table(table) => data_table(table),
    }
}

fn passage(text: &str) -> Markup {
    html! {
        div.context-area { (text) }
    }
}

fn data_table(table: &DataTable) -> Markup {
    html! {
        div.context-table {
            @if let Some(caption) = &table.caption {
                p.context-caption { (caption) }
            }
            table {
                thead {
                    tr {
                        @for header in &table.headers {
                            th { (header) }
                        }
                    }
                }
                tbody {
                    @for row in &table.rows {
                        tr {
                            @for cell in row {
                                td { (cell_text(cell)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
