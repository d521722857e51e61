/// Popup UI for the tab switcher

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::chrome::ChromeHost;
use crate::config::PopupConfig;
use crate::controller::{self, PointerKind, RowEvent, RowTarget};
use crate::table::{Row, TabTable};

pub enum TableAction {
    Load(TabTable),
    Pointer(RowEvent),
}

impl Reducible for TabTable {
    type Action = TableAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TableAction::Load(table) => Rc::new(table),
            TableAction::Pointer(event) => {
                let mut next = (*self).clone();
                next.apply(&event);
                Rc::new(next)
            }
        }
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: PopupConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let table = use_reducer({
        let config = props.config.clone();
        move || TabTable::new(config)
    });
    let error = use_state(|| None::<String>);

    // Load and highlight tabs on mount
    {
        let dispatcher = table.dispatcher();
        let error = error.clone();
        let config = props.config.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match controller::open_popup(&ChromeHost, config).await {
                    Ok(opened) => {
                        dispatcher.dispatch(TableAction::Load(opened.table));
                        if let Err(e) = opened.highlight {
                            log::error!("Failed to highlight the active tab: {}", e);
                            error.set(Some(e.to_string()));
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to list open tabs: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_event = {
        let dispatcher = table.dispatcher();
        Callback::from(move |event: RowEvent| {
            dispatcher.dispatch(TableAction::Pointer(event));

            if let Some(command) = event.host_command() {
                spawn_local(async move {
                    if let Err(err) = controller::execute(&ChromeHost, command).await {
                        log::warn!("{:?} failed: {}", command, err);
                    }
                });
            }
        })
    };

    html! {
        <>
            if let Some(err) = (*error).clone() {
                <p class="error-text">{err}</p>
            }
            <TabList table={(*table).clone()} {on_event} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabListProps {
    pub table: TabTable,
    pub on_event: Callback<RowEvent>,
}

/// The tab rows, with one delegated handler per pointer event kind on the
/// container.
#[function_component(TabList)]
pub fn tab_list(props: &TabListProps) -> Html {
    let on_pointer = |kind: PointerKind| {
        let on_event = props.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(event) = e.target_dyn_into::<Element>().and_then(|target| row_event(kind, &target)) {
                on_event.emit(event);
            }
        })
    };

    html! {
        <table
            class="tab-container"
            onclick={on_pointer(PointerKind::Click)}
            onmouseover={on_pointer(PointerKind::Over)}
            onmouseout={on_pointer(PointerKind::Out)}
        >
            {for props.table.rows().map(|row| render_row(row, props.table.config()))}
        </table>
    }
}

fn render_row(row: &Row, config: &PopupConfig) -> Html {
    let hidden = row.close_hidden.then_some("hidden");
    let span_style = row
        .span_width
        .as_ref()
        .map(|width| format!("width: {};", width))
        .unwrap_or_default();
    let domain_color = row.domain_color.as_ref().map(|color| format!("color: {};", color));
    let domain_style = [Some(span_style.clone()).filter(|style| !style.is_empty()), domain_color]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let row_style = row
        .background
        .as_ref()
        .map(|color| format!("background-color: {};", color))
        .unwrap_or_default();

    html! {
        <tr
            key={row.tab_id()}
            class="tab-row"
            data-windowid={row.window_id().to_string()}
            data-tabid={row.tab_id().to_string()}
            data-infocus={row.in_focus.to_string()}
            style={row_style}
        >
            <td class="icon-td">
                <img class="icon" src={row.tab.icon.clone()} />
            </td>
            <td class="col2 title-container" colspan={row.title_colspan.to_string()}>
                <span class="tab-data" style={span_style}>{&row.tab.title}</span>
                <span class="tab-data url" style={domain_style}>{&row.domain}</span>
            </td>
            <td class={classes!("btn-close-td", hidden)}>
                <img class={classes!("btn-close", hidden)} src={config.close_icon.clone()} />
            </td>
        </tr>
    }
}

/// Classify the element an event landed on
pub fn row_target(target: &Element) -> RowTarget {
    let class_name = target.class_name();
    let classes: Vec<&str> = class_name.split_whitespace().collect();

    if classes.contains(&"btn-close") {
        RowTarget::CloseButton
    } else if classes.contains(&"btn-close-td") {
        RowTarget::CloseCell
    } else {
        RowTarget::Body
    }
}

/// Resolve a DOM event target to the row it belongs to
pub fn row_event(kind: PointerKind, target: &Element) -> Option<RowEvent> {
    let row = target.closest("tr.tab-row").ok().flatten()?;
    let window_id = row.get_attribute("data-windowid")?.parse().ok();
    let tab_id = row.get_attribute("data-tabid")?.parse().ok();

    match (window_id, tab_id) {
        (Some(window_id), Some(tab_id)) => Some(RowEvent {
            kind,
            target: row_target(target),
            window_id,
            tab_id,
        }),
        _ => {
            log::debug!("Ignoring event on row with unreadable ids");
            None
        }
    }
}
