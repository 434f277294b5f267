use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use wasm_bindgen::prelude::*;

/// Default asset locations, relative to the page serving the dashboard.
pub mod defaults {
    pub const CHART_ROOT: &str = "../graph_generation/Overall_Player_Stats";
    pub const PORTRAIT_ROOT: &str = "images";
}

const BUNDLED_ROSTER: &str = include_str!("roster.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub introduction: Option<String>,
}

/// Players and opposing teams offered by the two dropdowns, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    RosterParse(String),
    UnknownPlayer(String),
    UnknownTeam(String),
    UnknownStat(String),
    NoPlayerSelected,
    StatsNotShown,
    StatOutsideCategory {
        stat: StatKind,
        category: StatCategory,
    },
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::RosterParse(msg) => write!(f, "Failed to parse roster: {}", msg),
            DashboardError::UnknownPlayer(name) => write!(f, "Unknown player '{}'", name),
            DashboardError::UnknownTeam(name) => write!(f, "Unknown team '{}'", name),
            DashboardError::UnknownStat(label) => write!(f, "Unknown statistic '{}'", label),
            DashboardError::NoPlayerSelected => write!(f, "No player is selected"),
            DashboardError::StatsNotShown => {
                write!(f, "A statistic can only be chosen while a stats panel is open")
            }
            DashboardError::StatOutsideCategory { stat, category } => write!(
                f,
                "'{}' is not one of the {}",
                stat.label(),
                category.heading()
            ),
        }
    }
}

impl std::error::Error for DashboardError {}

impl Roster {
    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn team_names(&self) -> Vec<String> {
        self.teams.clone()
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn has_team(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t == name)
    }

    /// Biography paragraph for `name`, if one is on file and non-empty.
    pub fn introduction(&self, name: &str) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.introduction.as_deref())
            .filter(|text| !text.is_empty())
    }
}

/// Parse a roster document, dropping blank and duplicate names.
pub fn parse_roster(json: &str) -> Result<Roster, DashboardError> {
    let raw: Roster =
        serde_json::from_str(json).map_err(|e| DashboardError::RosterParse(e.to_string()))?;

    let mut players = Vec::with_capacity(raw.players.len());
    let mut seen_players = HashSet::new();
    for (i, mut player) in raw.players.into_iter().enumerate() {
        let name = player.name.trim().to_string();
        if name.is_empty() {
            debug!("Warning: player entry {} has a blank name, skipping", i + 1);
            continue;
        }
        if !seen_players.insert(name.clone()) {
            debug!("Warning: duplicate player '{}' at entry {}, skipping", name, i + 1);
            continue;
        }
        player.name = name;
        players.push(player);
    }

    let mut teams = Vec::with_capacity(raw.teams.len());
    let mut seen_teams = HashSet::new();
    for (i, team) in raw.teams.into_iter().enumerate() {
        let team = team.trim().to_string();
        if team.is_empty() {
            debug!("Warning: team entry {} is blank, skipping", i + 1);
            continue;
        }
        if !seen_teams.insert(team.clone()) {
            debug!("Warning: duplicate team '{}' at entry {}, skipping", team, i + 1);
            continue;
        }
        teams.push(team);
    }

    info!(
        "Loaded roster with {} players and {} teams",
        players.len(),
        teams.len()
    );
    Ok(Roster { players, teams })
}

/// Roster compiled into the binary.
pub fn load_bundled_roster() -> Result<Roster, DashboardError> {
    parse_roster(BUNDLED_ROSTER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatCategory {
    Batting,
    Bowling,
}

const BATTING_STATS: [StatKind; 7] = [
    StatKind::BattingAverage,
    StatKind::BattingStrikeRate,
    StatKind::RunsScored,
    StatKind::FiftiesVsHundreds,
    StatKind::NotOutPercentage,
    StatKind::RunsAtBattingPosition,
    StatKind::StrikeRateAtBattingPosition,
];

const BOWLING_STATS: [StatKind; 2] = [StatKind::AverageEconomy, StatKind::WicketsTaken];

impl StatCategory {
    pub const ALL: [StatCategory; 2] = [StatCategory::Batting, StatCategory::Bowling];

    pub fn heading(self) -> &'static str {
        match self {
            StatCategory::Batting => "Batting Stats",
            StatCategory::Bowling => "Bowling Stats",
        }
    }

    fn directory(self) -> &'static str {
        match self {
            StatCategory::Batting => "Batting_Stats",
            StatCategory::Bowling => "Bowling_Stats",
        }
    }

    /// Statistics in dropdown order.
    pub fn stats(self) -> &'static [StatKind] {
        match self {
            StatCategory::Batting => &BATTING_STATS,
            StatCategory::Bowling => &BOWLING_STATS,
        }
    }

    /// The statistic shown as soon as the category is opened.
    pub fn default_stat(self) -> StatKind {
        self.stats()[0]
    }
}

/// One pre-rendered chart per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    BattingAverage,
    BattingStrikeRate,
    RunsScored,
    FiftiesVsHundreds,
    NotOutPercentage,
    RunsAtBattingPosition,
    StrikeRateAtBattingPosition,
    AverageEconomy,
    WicketsTaken,
}

impl StatKind {
    pub fn label(self) -> &'static str {
        match self {
            StatKind::BattingAverage => "Batting Average",
            StatKind::BattingStrikeRate => "Batting Strike Rate",
            StatKind::RunsScored => "Runs Scored",
            StatKind::FiftiesVsHundreds => "Fifties v/s Hundreds",
            StatKind::NotOutPercentage => "Not Out Percentage",
            StatKind::RunsAtBattingPosition => "Runs Scored at Batting Position",
            StatKind::StrikeRateAtBattingPosition => "Batting Strike Rate at Batting Position",
            StatKind::AverageEconomy => "Average Economy",
            StatKind::WicketsTaken => "Wickets Taken",
        }
    }

    pub fn category(self) -> StatCategory {
        match self {
            StatKind::AverageEconomy | StatKind::WicketsTaken => StatCategory::Bowling,
            _ => StatCategory::Batting,
        }
    }

    fn directory(self) -> &'static str {
        match self {
            StatKind::BattingAverage => "Batting_Averages",
            StatKind::BattingStrikeRate => "Batting_Strike_Rates",
            StatKind::RunsScored => "Runs_Scored",
            StatKind::FiftiesVsHundreds => "Fifties_vs_Hundreds",
            StatKind::NotOutPercentage => "Not_Out_Percentages",
            StatKind::RunsAtBattingPosition => "Runs_Scored_vs_Batting_Position",
            StatKind::StrikeRateAtBattingPosition => "Batting_Strike_Rate_vs_Batting_Position",
            StatKind::AverageEconomy => "Average_Economy",
            StatKind::WicketsTaken => "Wickets_Taken",
        }
    }

    fn file_suffix(self) -> &'static str {
        match self {
            StatKind::BattingAverage => "average",
            StatKind::BattingStrikeRate | StatKind::StrikeRateAtBattingPosition => "strike_rate",
            StatKind::RunsScored => "runs",
            StatKind::FiftiesVsHundreds => "fifties_vs_hundreds",
            StatKind::NotOutPercentage => "not_out_percentages",
            StatKind::RunsAtBattingPosition => "runs_scored",
            StatKind::AverageEconomy => "average_economy",
            StatKind::WicketsTaken => "wickets",
        }
    }

    /// Resolve the string key carried by a stat `<select>` option.
    pub fn from_label(label: &str) -> Result<StatKind, DashboardError> {
        StatCategory::ALL
            .iter()
            .flat_map(|c| c.stats().iter().copied())
            .find(|s| s.label() == label)
            .ok_or_else(|| DashboardError::UnknownStat(label.to_string()))
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Replace the first space only; the chart generator names files this way.
pub fn underscore_first_space(name: &str) -> String {
    name.replacen(' ', "_", 1)
}

/// File-name stem used for a player's charts, e.g. `virat_kohli`.
pub fn image_slug(name: &str) -> String {
    underscore_first_space(name).to_lowercase()
}

/// Roots that chart and portrait paths are built under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub chart_root: String,
    pub portrait_root: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new(defaults::CHART_ROOT, defaults::PORTRAIT_ROOT)
    }
}

impl AssetPaths {
    pub fn new(chart_root: impl Into<String>, portrait_root: impl Into<String>) -> Self {
        Self {
            chart_root: chart_root.into(),
            portrait_root: portrait_root.into(),
        }
    }

    pub fn chart(&self, player: &str, stat: StatKind) -> String {
        format!(
            "{}/{}/{}/{}_{}.png",
            self.chart_root.trim_end_matches('/'),
            stat.category().directory(),
            stat.directory(),
            image_slug(player),
            stat.file_suffix()
        )
    }

    pub fn portrait(&self, player: &str) -> String {
        format!(
            "{}/{}.jpg",
            self.portrait_root.trim_end_matches('/'),
            underscore_first_space(player)
        )
    }
}

/// What the two dropdowns currently point at. Picking one clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Nothing,
    Player(String),
    Team(String),
}

/// Panel shown below the player options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Blank,
    Introduction,
    Stats {
        category: StatCategory,
        stat: StatKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    SelectPlayer(String),
    SelectTeam(String),
    ShowIntroduction,
    ShowStats(StatCategory),
    ChooseStat(StatKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introduction {
    pub player: String,
    pub heading: String,
    pub text: String,
    pub portrait: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub title: String,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub selection: Selection,
    pub view: View,
}

impl Dashboard {
    /// Compute the state that follows `action`. On error the caller keeps `self`.
    pub fn apply(
        &self,
        roster: &Roster,
        action: DashboardAction,
    ) -> Result<Dashboard, DashboardError> {
        match action {
            DashboardAction::SelectPlayer(name) => {
                if name.is_empty() {
                    return Ok(self.clone());
                }
                if !roster.has_player(&name) {
                    return Err(DashboardError::UnknownPlayer(name));
                }
                debug!("Player selected: {}", name);
                Ok(Dashboard {
                    selection: Selection::Player(name),
                    view: View::Blank,
                })
            }
            DashboardAction::SelectTeam(name) => {
                if name.is_empty() {
                    return Ok(self.clone());
                }
                if !roster.has_team(&name) {
                    return Err(DashboardError::UnknownTeam(name));
                }
                debug!("Team selected: {}", name);
                Ok(Dashboard {
                    selection: Selection::Team(name),
                    view: View::Blank,
                })
            }
            DashboardAction::ShowIntroduction => {
                self.selected_player()?;
                Ok(Dashboard {
                    selection: self.selection.clone(),
                    view: View::Introduction,
                })
            }
            DashboardAction::ShowStats(category) => {
                self.selected_player()?;
                Ok(Dashboard {
                    selection: self.selection.clone(),
                    view: View::Stats {
                        category,
                        stat: category.default_stat(),
                    },
                })
            }
            DashboardAction::ChooseStat(stat) => match self.view {
                View::Stats { category, .. } if stat.category() == category => Ok(Dashboard {
                    selection: self.selection.clone(),
                    view: View::Stats { category, stat },
                }),
                View::Stats { category, .. } => {
                    Err(DashboardError::StatOutsideCategory { stat, category })
                }
                _ => Err(DashboardError::StatsNotShown),
            },
        }
    }

    pub fn player(&self) -> Option<&str> {
        match &self.selection {
            Selection::Player(name) => Some(name),
            _ => None,
        }
    }

    pub fn team(&self) -> Option<&str> {
        match &self.selection {
            Selection::Team(name) => Some(name),
            _ => None,
        }
    }

    pub fn selected_player(&self) -> Result<&str, DashboardError> {
        self.player().ok_or(DashboardError::NoPlayerSelected)
    }

    /// Heading of the options panel.
    pub fn menu_heading(&self) -> Option<String> {
        match &self.selection {
            Selection::Nothing => None,
            Selection::Player(name) => Some(name.clone()),
            Selection::Team(team) => Some(format!("Optimal team for India v/s {}", team)),
        }
    }

    pub fn introduction(&self, roster: &Roster, paths: &AssetPaths) -> Option<Introduction> {
        if self.view != View::Introduction {
            return None;
        }
        let player = self.player()?;
        let intro = match roster.introduction(player) {
            Some(text) => Introduction {
                player: player.to_string(),
                heading: "Introduction".to_string(),
                text: text.to_string(),
                portrait: Some(paths.portrait(player)),
            },
            None => {
                debug!("No introduction on file for {}", player);
                Introduction {
                    player: player.to_string(),
                    heading: format!("{} - Introduction", player),
                    text: format!("Introduction not available for {}.", player),
                    portrait: None,
                }
            }
        };
        Some(intro)
    }

    pub fn chart(&self, paths: &AssetPaths) -> Option<Chart> {
        let View::Stats { stat, .. } = self.view else {
            return None;
        };
        let player = self.player()?;
        Some(Chart {
            title: format!("{} - {}", player, stat.label()),
            src: paths.chart(player, stat),
            alt: format!("{} Graph", stat.label()),
        })
    }
}

/// Chart path for plain pages that want the same naming convention.
///
/// Returns `undefined` on the JS side when `stat_label` is not a known statistic.
#[wasm_bindgen]
pub fn chart_image_path(player: &str, stat_label: &str) -> Option<String> {
    match StatKind::from_label(stat_label) {
        Ok(stat) => Some(AssetPaths::default().chart(player, stat)),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        load_bundled_roster().expect("bundled roster parses")
    }

    fn with_player(name: &str) -> Dashboard {
        Dashboard::default()
            .apply(&roster(), DashboardAction::SelectPlayer(name.to_string()))
            .unwrap()
    }

    #[test]
    fn bundled_roster_matches_dropdowns() {
        let r = roster();
        assert_eq!(r.players.len(), 15);
        assert_eq!(r.teams.len(), 9);
        assert_eq!(r.player_names()[0], "Rohit Sharma");
        assert_eq!(r.player_names()[14], "Kuldeep Yadav");
        assert_eq!(r.team_names()[0], "Australia");
        assert_eq!(r.team_names()[8], "Afghanistan");
        assert!(r.players.iter().all(|p| p.introduction.is_some()));
    }

    #[test]
    fn parse_roster_skips_blank_and_duplicate_names() {
        let json = r#"{
            "players": [
                { "name": " Virat Kohli ", "introduction": "Bats at three." },
                { "name": "" },
                { "name": "Virat Kohli", "introduction": "Second copy." }
            ],
            "teams": ["England", "  ", "England", "Pakistan"]
        }"#;
        let r = parse_roster(json).unwrap();
        assert_eq!(r.player_names(), vec!["Virat Kohli"]);
        assert_eq!(r.introduction("Virat Kohli"), Some("Bats at three."));
        assert_eq!(r.team_names(), vec!["England", "Pakistan"]);
    }

    #[test]
    fn parse_roster_reports_malformed_json() {
        let err = parse_roster("{ players: ").unwrap_err();
        assert!(matches!(err, DashboardError::RosterParse(_)));
    }

    #[test]
    fn only_empty_introduction_counts_as_missing() {
        let r = parse_roster(
            r#"{ "players": [
                { "name": "A B", "introduction": "" },
                { "name": "C D", "introduction": "  " }
            ] }"#,
        )
        .unwrap();
        assert!(r.has_player("A B"));
        assert_eq!(r.introduction("A B"), None);
        assert_eq!(r.introduction("C D"), Some("  "));
    }

    #[test]
    fn chart_paths_follow_generator_naming() {
        let paths = AssetPaths::default();
        assert_eq!(
            paths.chart("Virat Kohli", StatKind::BattingAverage),
            "../graph_generation/Overall_Player_Stats/Batting_Stats/Batting_Averages/virat_kohli_average.png"
        );
        assert_eq!(
            paths.chart("KL Rahul", StatKind::StrikeRateAtBattingPosition),
            "../graph_generation/Overall_Player_Stats/Batting_Stats/Batting_Strike_Rate_vs_Batting_Position/kl_rahul_strike_rate.png"
        );
        assert_eq!(
            paths.chart("Jasprit Bumrah", StatKind::WicketsTaken),
            "../graph_generation/Overall_Player_Stats/Bowling_Stats/Wickets_Taken/jasprit_bumrah_wickets.png"
        );
    }

    #[test]
    fn custom_roots_tolerate_trailing_slash() {
        let paths = AssetPaths::new("charts/", "img/");
        assert_eq!(
            paths.chart("Axar Patel", StatKind::AverageEconomy),
            "charts/Bowling_Stats/Average_Economy/axar_patel_average_economy.png"
        );
        assert_eq!(paths.portrait("Axar Patel"), "img/Axar_Patel.jpg");
    }

    #[test]
    fn only_first_space_is_replaced() {
        assert_eq!(underscore_first_space("Mohammed Bin Siraj"), "Mohammed_Bin Siraj");
        assert_eq!(image_slug("Mohammed Bin Siraj"), "mohammed_bin siraj");
    }

    #[test]
    fn stat_labels_resolve_within_their_category() {
        for category in StatCategory::ALL {
            for &stat in category.stats() {
                assert_eq!(StatKind::from_label(stat.label()), Ok(stat));
                assert_eq!(stat.category(), category);
            }
        }
        assert_eq!(
            StatKind::from_label("Economy"),
            Err(DashboardError::UnknownStat("Economy".to_string()))
        );
    }

    #[test]
    fn selecting_a_team_replaces_the_player() {
        let d = with_player("Virat Kohli")
            .apply(&roster(), DashboardAction::ShowIntroduction)
            .unwrap()
            .apply(&roster(), DashboardAction::SelectTeam("Pakistan".to_string()))
            .unwrap();
        assert_eq!(d.selection, Selection::Team("Pakistan".to_string()));
        assert_eq!(d.view, View::Blank);
        assert_eq!(d.player(), None);
        assert_eq!(
            d.menu_heading().as_deref(),
            Some("Optimal team for India v/s Pakistan")
        );
    }

    #[test]
    fn empty_selection_leaves_state_untouched() {
        let d = with_player("Virat Kohli");
        let next = d
            .apply(&roster(), DashboardAction::SelectTeam(String::new()))
            .unwrap();
        assert_eq!(next, d);
    }

    #[test]
    fn selecting_a_player_resets_the_open_panel() {
        let r = roster();
        let paths = AssetPaths::default();
        let d = with_player("Virat Kohli")
            .apply(&r, DashboardAction::ShowStats(StatCategory::Batting))
            .unwrap();
        assert!(d.chart(&paths).is_some());

        let same = d
            .apply(&r, DashboardAction::SelectPlayer(String::new()))
            .unwrap();
        assert_eq!(same, d);

        let next = d
            .apply(&r, DashboardAction::SelectPlayer("KL Rahul".to_string()))
            .unwrap();
        assert_eq!(next.selection, Selection::Player("KL Rahul".to_string()));
        assert_eq!(next.view, View::Blank);
        assert_eq!(next.chart(&paths), None);

        let team = next
            .apply(&r, DashboardAction::SelectTeam("England".to_string()))
            .unwrap();
        assert_eq!(
            team.apply(&r, DashboardAction::ShowIntroduction),
            Err(DashboardError::NoPlayerSelected)
        );
        assert_eq!(
            team.apply(&r, DashboardAction::ShowStats(StatCategory::Bowling)),
            Err(DashboardError::NoPlayerSelected)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let d = Dashboard::default();
        assert_eq!(
            d.apply(&roster(), DashboardAction::SelectPlayer("Sachin".to_string())),
            Err(DashboardError::UnknownPlayer("Sachin".to_string()))
        );
        assert_eq!(
            d.apply(&roster(), DashboardAction::SelectTeam("Narnia".to_string())),
            Err(DashboardError::UnknownTeam("Narnia".to_string()))
        );
    }

    #[test]
    fn player_panels_need_a_player() {
        let d = Dashboard::default();
        assert_eq!(
            d.apply(&roster(), DashboardAction::ShowIntroduction),
            Err(DashboardError::NoPlayerSelected)
        );
        assert_eq!(
            d.apply(&roster(), DashboardAction::ShowStats(StatCategory::Batting)),
            Err(DashboardError::NoPlayerSelected)
        );
        assert_eq!(
            with_player("KL Rahul")
                .apply(&roster(), DashboardAction::ChooseStat(StatKind::RunsScored)),
            Err(DashboardError::StatsNotShown)
        );
    }

    #[test]
    fn opening_stats_shows_default_chart() {
        let paths = AssetPaths::default();
        let d = with_player("Mohammed Shami")
            .apply(&roster(), DashboardAction::ShowStats(StatCategory::Bowling))
            .unwrap();
        let chart = d.chart(&paths).unwrap();
        assert_eq!(chart.title, "Mohammed Shami - Average Economy");
        assert_eq!(chart.alt, "Average Economy Graph");
        assert!(chart.src.ends_with("/Average_Economy/mohammed_shami_average_economy.png"));
        assert!(d.introduction(&roster(), &paths).is_none());
    }

    #[test]
    fn choosing_a_stat_switches_the_chart() {
        let paths = AssetPaths::default();
        let d = with_player("Shubman Gill")
            .apply(&roster(), DashboardAction::ShowStats(StatCategory::Batting))
            .unwrap()
            .apply(&roster(), DashboardAction::ChooseStat(StatKind::FiftiesVsHundreds))
            .unwrap();
        assert_eq!(
            d.chart(&paths).unwrap().src,
            "../graph_generation/Overall_Player_Stats/Batting_Stats/Fifties_vs_Hundreds/shubman_gill_fifties_vs_hundreds.png"
        );

        let err = d
            .apply(&roster(), DashboardAction::ChooseStat(StatKind::WicketsTaken))
            .unwrap_err();
        assert_eq!(
            err,
            DashboardError::StatOutsideCategory {
                stat: StatKind::WicketsTaken,
                category: StatCategory::Batting,
            }
        );
    }

    #[test]
    fn introduction_clears_the_chart() {
        let paths = AssetPaths::default();
        let d = with_player("Hardik Pandya")
            .apply(&roster(), DashboardAction::ShowStats(StatCategory::Batting))
            .unwrap()
            .apply(&roster(), DashboardAction::ShowIntroduction)
            .unwrap();
        assert!(d.chart(&paths).is_none());
        let intro = d.introduction(&roster(), &paths).unwrap();
        assert_eq!(intro.heading, "Introduction");
        assert!(intro.text.starts_with("Hardik Pandya is an Indian all-rounder"));
        assert_eq!(intro.portrait.as_deref(), Some("images/Hardik_Pandya.jpg"));
    }

    #[test]
    fn missing_introduction_falls_back_to_placeholder() {
        let r = parse_roster(r#"{ "players": [{ "name": "Tilak Varma" }] }"#).unwrap();
        let d = Dashboard::default()
            .apply(&r, DashboardAction::SelectPlayer("Tilak Varma".to_string()))
            .unwrap()
            .apply(&r, DashboardAction::ShowIntroduction)
            .unwrap();
        let intro = d.introduction(&r, &AssetPaths::default()).unwrap();
        assert_eq!(intro.heading, "Tilak Varma - Introduction");
        assert_eq!(intro.text, "Introduction not available for Tilak Varma.");
        assert_eq!(intro.portrait, None);
    }

    #[test]
    fn exported_path_helper_rejects_unknown_labels() {
        assert_eq!(
            chart_image_path("Rohit Sharma", "Runs Scored").as_deref(),
            Some("../graph_generation/Overall_Player_Stats/Batting_Stats/Runs_Scored/rohit_sharma_runs.png")
        );
        assert_eq!(chart_image_path("Rohit Sharma", "Sixes"), None);
    }
}
