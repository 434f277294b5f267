//! Yew view components for the dashboard panels.
//!
//! Panels render from derived dashboard values and report user intent
//! through callbacks, so none of them hold state of their own.

use crate::config::{
    CHART_HEIGHT, CHART_WIDTH, INTRODUCTION_BUTTON, PORTRAIT_HEIGHT, PORTRAIT_WIDTH,
};
use crate::hooks::use_synced_select;
use crate::utils::stat_labels;
use cricket_dashboard::{Chart, DashboardAction, Introduction, StatCategory, StatKind};
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// `<select>` whose options come from a lookup table.
#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Leading option with an empty value, shown while nothing is chosen.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    pub options: Rc<Vec<String>>,
    pub selected: Option<String>,
    pub onchange: Callback<String>,
}

#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let select_ref = use_synced_select(props.selected.clone());
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            if let Some(label) = &props.label {
                <label for={props.id.clone()}>{ label.clone() }</label>
            }
            <select id={props.id.clone()} class="form-control" ref={select_ref} {onchange}>
                if let Some(placeholder) = &props.placeholder {
                    <option value="">{ placeholder.clone() }</option>
                }
                { props.options.iter().map(|name| {
                    html! { <option value={name.clone()}>{ name.clone() }</option> }
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Heading plus, for a player, the three panel buttons.
pub fn render_options_panel(
    heading: Option<String>,
    is_player: bool,
    on_action: &Callback<DashboardAction>,
) -> Html {
    let Some(heading) = heading else {
        return html! {};
    };

    if !is_player {
        return html! { <h4>{ heading }</h4> };
    }

    html! {
        <>
            <h4>{ heading }</h4>
            <button class="btn btn-primary"
                onclick={on_action.reform(|_| DashboardAction::ShowIntroduction)}>
                { INTRODUCTION_BUTTON }
            </button>
            { StatCategory::ALL.iter().map(|&category| html! {
                <button class="btn btn-primary"
                    onclick={on_action.reform(move |_| DashboardAction::ShowStats(category))}>
                    { category.heading() }
                </button>
            }).collect::<Html>() }
        </>
    }
}

pub fn render_introduction(intro: &Introduction) -> Html {
    html! {
        <>
            <h4>{ intro.heading.clone() }</h4>
            <p>{ intro.text.clone() }</p>
            if let Some(src) = &intro.portrait {
                <img src={src.clone()}
                    alt={intro.player.clone()}
                    width={PORTRAIT_WIDTH.to_string()}
                    height={PORTRAIT_HEIGHT.to_string()} />
            }
        </>
    }
}

/// Category heading and the stat dropdown for the open stats panel.
pub fn render_stat_picker(
    category: StatCategory,
    stat: StatKind,
    onchange: Callback<String>,
) -> Html {
    let id = match category {
        StatCategory::Batting => "battingStatsOptions",
        StatCategory::Bowling => "bowlingStatsOptions",
    };
    html! {
        <>
            <h4>{ category.heading() }</h4>
            <Dropdown
                key={id}
                id={id}
                options={stat_labels(category)}
                selected={Some(stat.label().to_string())}
                {onchange}
            />
        </>
    }
}

pub fn render_chart(chart: &Chart) -> Html {
    html! {
        <>
            <h5>{ chart.title.clone() }</h5>
            <img src={chart.src.clone()}
                alt={chart.alt.clone()}
                width={CHART_WIDTH.to_string()}
                height={CHART_HEIGHT.to_string()} />
        </>
    }
}
