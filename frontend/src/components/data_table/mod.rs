//! Reusable data table with optional client-side pagination and an action
//! column.
//!
//! The table is purely presentational: it renders the rows it is given,
//! pages through them locally and reports action-button clicks back to the
//! parent through `on_action`. It never mutates or refetches data itself.

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use common::model::person::PersonRow;

const DEFAULT_PAGE_SIZE: usize = 10;

/// A displayed column: `name` is the record field, `label` the header text.
#[derive(Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub label: String,
}

/// One button of the action column.
#[derive(Clone, PartialEq)]
pub struct ActionColumn {
    pub icon: String,
    pub tooltip: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Default)]
pub struct TableConfig {
    pub paginator: bool,
    pub page_size_options: Vec<usize>,
    pub action_column: Vec<ActionColumn>,
}

/// Emitted when an action button is clicked on a row.
#[derive(Clone, PartialEq)]
pub struct TableAction {
    pub action: String,
    pub row: PersonRow,
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub columns: Vec<Column>,
    #[prop_or_default]
    pub data: Vec<PersonRow>,
    #[prop_or_default]
    pub config: TableConfig,
    #[prop_or_default]
    pub on_action: Callback<TableAction>,
}

pub enum TableMsg {
    SetPage(usize),
    SetPageSize(usize),
}

pub struct DataTable {
    page: usize,
    page_size: usize,
}

impl Component for DataTable {
    type Message = TableMsg;
    type Properties = DataTableProps;

    fn create(ctx: &Context<Self>) -> Self {
        let page_size = ctx
            .props()
            .config
            .page_size_options
            .first()
            .copied()
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page: 0, page_size }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let len = ctx.props().data.len();
        match msg {
            TableMsg::SetPage(page) => {
                self.page = clamp_page(page, len, self.page_size);
                true
            }
            TableMsg::SetPageSize(size) => {
                self.page_size = size.max(1);
                self.page = clamp_page(self.page, len, self.page_size);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // Data was replaced; keep the page index in range.
        self.page = clamp_page(self.page, ctx.props().data.len(), self.page_size);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let window = if props.config.paginator {
            page_window(props.data.len(), self.page, self.page_size)
        } else {
            0..props.data.len()
        };

        html! {
            <div class="data-table">
                <table>
                    <thead>
                        <tr>
                            { for props.columns.iter().map(|column| html! { <th>{ &column.label }</th> }) }
                            {
                                if props.config.action_column.is_empty() {
                                    html! {}
                                } else {
                                    html! { <th class="actions-header">{"Actions"}</th> }
                                }
                            }
                        </tr>
                    </thead>
                    <tbody>
                        { for props.data[window].iter().map(|row| self.render_row(props, row)) }
                    </tbody>
                </table>
                { if props.config.paginator { self.render_paginator(ctx) } else { html! {} } }
            </div>
        }
    }
}

impl DataTable {
    fn render_row(&self, props: &DataTableProps, row: &PersonRow) -> Html {
        html! {
            <tr>
                { for props.columns.iter().map(|column| html! { <td>{ row.field(&column.name) }</td> }) }
                {
                    if props.config.action_column.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <td class="actions-cell">
                                { for props.config.action_column.iter().map(|action| {
                                    let on_action = props.on_action.clone();
                                    let emitted = TableAction {
                                        action: action.name.clone(),
                                        row: row.clone(),
                                    };
                                    html! {
                                        <button
                                            class="icon-btn"
                                            title={action.tooltip.clone()}
                                            onclick={Callback::from(move |_| on_action.emit(emitted.clone()))}
                                        >
                                            <i class="material-icons">{ &action.icon }</i>
                                        </button>
                                    }
                                }) }
                            </td>
                        }
                    }
                }
            </tr>
        }
    }

    fn render_paginator(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let len = props.data.len();
        let pages = page_count(len, self.page_size);
        let window = page_window(len, self.page, self.page_size);
        let page = self.page;
        let fallback = self.page_size;

        html! {
            <div class="paginator">
                {
                    if props.config.page_size_options.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <label>
                                {"Rows per page:"}
                                <select onchange={link.callback(move |e: Event| {
                                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                                    TableMsg::SetPageSize(value.parse().unwrap_or(fallback))
                                })}>
                                    { for props.config.page_size_options.iter().map(|size| html! {
                                        <option value={size.to_string()} selected={*size == self.page_size}>
                                            { size.to_string() }
                                        </option>
                                    }) }
                                </select>
                            </label>
                        }
                    }
                }
                <span class="page-range">
                    { format!("{}-{} of {}", if len == 0 { 0 } else { window.start + 1 }, window.end, len) }
                </span>
                <button
                    class="icon-btn"
                    disabled={page == 0}
                    onclick={link.callback(move |_| TableMsg::SetPage(page.saturating_sub(1)))}
                >
                    <i class="material-icons">{"chevron_left"}</i>
                </button>
                <button
                    class="icon-btn"
                    disabled={page + 1 >= pages}
                    onclick={link.callback(move |_| TableMsg::SetPage(page + 1))}
                >
                    <i class="material-icons">{"chevron_right"}</i>
                </button>
            </div>
        }
    }
}

/// Number of pages for `len` rows, at least one so an empty table still has
/// a current page.
fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.min(page_count(len, page_size) - 1)
}

/// Index range of the rows shown on `page`.
fn page_window(len: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    if page_size == 0 {
        return 0..len;
    }
    let start = (page * page_size).min(len);
    let end = (start + page_size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(10, 3), 4);
    }

    #[test]
    fn page_window_covers_full_and_partial_pages() {
        assert_eq!(page_window(10, 0, 5), 0..5);
        assert_eq!(page_window(10, 1, 5), 5..10);
        assert_eq!(page_window(7, 1, 5), 5..7);
        assert_eq!(page_window(0, 0, 5), 0..0);
    }

    #[test]
    fn out_of_range_pages_yield_empty_windows() {
        assert_eq!(page_window(4, 3, 5), 4..4);
    }

    #[test]
    fn clamp_page_pulls_the_index_back_after_data_shrinks() {
        assert_eq!(clamp_page(3, 20, 5), 3);
        assert_eq!(clamp_page(3, 6, 5), 1);
        assert_eq!(clamp_page(3, 0, 5), 0);
    }
}
