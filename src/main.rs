//! Main module for the cricket stats dashboard using Yew.
//! Wires the roster, dashboard state and panel components.

use cricket_dashboard::{AssetPaths, Dashboard, DashboardAction, StatKind, View};
use log::{info, warn};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{
    render_chart, render_introduction, render_options_panel, render_stat_picker, Dropdown,
};
use config::*;
use hooks::use_roster;
use utils::dropdown_values;

/// Primary application component wiring state and panels.
#[function_component(Main)]
fn main_component() -> Html {
    let roster = use_roster();
    let dashboard = use_state(Dashboard::default);
    let paths = use_memo((), |_| AssetPaths::default());
    let player_options = use_memo(roster.clone(), |roster| roster.player_names());
    let team_options = use_memo(roster.clone(), |roster| roster.team_names());

    use_effect_with((), |_| {
        gloo_utils::document().set_title(APP_TITLE);
        info!("Dashboard mounted");
        || ()
    });

    // Every panel change goes through the state machine; rejected actions keep the current view.
    let dispatch = {
        let dashboard = dashboard.clone();
        let roster = roster.clone();
        Callback::from(move |action: DashboardAction| {
            match dashboard.apply(&roster, action) {
                Ok(next) => dashboard.set(next),
                Err(e) => warn!("Ignoring dashboard action: {}", e),
            }
        })
    };

    let on_stat_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| match StatKind::from_label(&value) {
            Ok(stat) => dispatch.emit(DashboardAction::ChooseStat(stat)),
            Err(e) => warn!("{}", e),
        })
    };

    let (selected_player, selected_team) = dropdown_values(&dashboard.selection);

    let data_panel = match dashboard.view {
        View::Blank => html! {},
        View::Introduction => dashboard
            .introduction(&roster, &paths)
            .map(|intro| render_introduction(&intro))
            .unwrap_or_default(),
        View::Stats { category, stat } => render_stat_picker(category, stat, on_stat_change),
    };

    let options_panel = render_options_panel(
        dashboard.menu_heading(),
        dashboard.player().is_some(),
        &dispatch,
    );

    let stats_panel = dashboard
        .chart(&paths)
        .map(|chart| render_chart(&chart))
        .unwrap_or_default();

    html! {
        <div class="container">
            <h1>{ APP_TITLE }</h1>

            <div class="selectors">
                <Dropdown
                    id={PLAYER_SELECT_ID}
                    label={Some(AttrValue::from(PLAYER_SELECT_LABEL))}
                    placeholder={Some(AttrValue::from(PLAYER_PLACEHOLDER))}
                    options={Rc::clone(&player_options)}
                    selected={selected_player}
                    onchange={dispatch.reform(DashboardAction::SelectPlayer)}
                />
                <Dropdown
                    id={TEAM_SELECT_ID}
                    label={Some(AttrValue::from(TEAM_SELECT_LABEL))}
                    placeholder={Some(AttrValue::from(TEAM_PLACEHOLDER))}
                    options={Rc::clone(&team_options)}
                    selected={selected_team}
                    onchange={dispatch.reform(DashboardAction::SelectTeam)}
                />
            </div>

            <div id="playerOptions">
                { options_panel }
            </div>
            <div id="playerData">{ data_panel }</div>
            <div id="statsContainer">{ stats_panel }</div>
        </div>
    }
}

/// Entry point: installs the panic hook and renders the dashboard.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
