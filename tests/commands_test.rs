//! Integration tests for the query façade through the public API

use mlb_graph::{
    commands::{MlbApp, Question},
    graph::{queries, RecordedGraph},
    MinCount, OutputFormat, PlayerId, TeamId, Year, YearWindow,
};
use serde_json::{json, Value};

async fn answer(graph: RecordedGraph, question: &Question) -> String {
    let app = MlbApp::new(graph);
    let mut out = Vec::new();
    app.answer(&mut out, question).await.unwrap();
    String::from_utf8(out).unwrap()
}

fn team_path_row(player: &str, id: &str, teams: &[&str], years: &[i64], followers: Vec<Value>) -> Value {
    json!({
        "player": player,
        "player_id": id,
        "team_sequence": teams,
        "year_sequence": years,
        "followers": followers
    })
}

#[tokio::test]
async fn test_identical_paths_are_mutual_followers() {
    let window = YearWindow::default();

    let for_a = RecordedGraph::new().with_rows(
        queries::TEAM_PATH_FOLLOWERS,
        vec![team_path_row(
            "Player A",
            "a01",
            &["A", "B"],
            &[2021, 2022],
            vec![json!({"name": "Player B", "player_id": "b01"})],
        )],
    );
    let for_b = RecordedGraph::new().with_rows(
        queries::TEAM_PATH_FOLLOWERS,
        vec![team_path_row(
            "Player B",
            "b01",
            &["A", "B"],
            &[2021, 2022],
            vec![json!({"name": "Player A", "player_id": "a01"})],
        )],
    );

    let a_text = answer(
        for_a,
        &Question::TeamPath {
            player: PlayerId::new("a01"),
            window,
        },
    )
    .await;
    let b_text = answer(
        for_b,
        &Question::TeamPath {
            player: PlayerId::new("b01"),
            window,
        },
    )
    .await;

    assert!(a_text.contains("  - Player B (b01)"));
    assert!(b_text.contains("  - Player A (a01)"));
    assert!(a_text.contains("2021:A  ->  2022:B"));
    assert!(!a_text.contains("Player C"));
}

#[tokio::test]
async fn test_team_path_query_is_scoped_to_player_and_window() {
    let graph = RecordedGraph::new();
    let app = MlbApp::new(graph);
    let window = YearWindow::new(Year::new(2021), Year::new(2022)).unwrap();
    let mut out = Vec::new();

    app.player_team_path_and_followers(&mut out, &PlayerId::new("a01"), window)
        .await
        .unwrap();

    let sent = app.graph().last_query().unwrap();
    assert_eq!(sent.name, queries::TEAM_PATH_FOLLOWERS);
    assert_eq!(
        sent.describe_params(),
        r#"player_id="a01", start_year=2021, end_year=2022"#
    );
}

#[tokio::test]
async fn test_every_question_hits_its_own_query() {
    let team = TeamId::new("BOS");
    let a = PlayerId::new("a01");
    let b = PlayerId::new("b01");
    let window = YearWindow::default();
    let year = Year::new(2023);

    let cases = vec![
        (
            Question::PlayersOnTeam {
                team: team.clone(),
                year,
            },
            queries::PLAYERS_ON_TEAM,
        ),
        (
            Question::TeamSeasonSummary {
                team: team.clone(),
                year,
            },
            queries::TEAM_SEASON_SUMMARY,
        ),
        (
            Question::MultiTeamPlayers {
                window,
                min_team_seasons: MinCount::default(),
            },
            queries::MULTI_TEAM_PLAYERS,
        ),
        (
            Question::ManagersAndParks {
                team: team.clone(),
                year,
            },
            queries::MANAGERS_AND_PARKS,
        ),
        (
            Question::TeammatePath {
                from: a.clone(),
                to: b.clone(),
            },
            queries::SHORTEST_TEAMMATE_PATH,
        ),
        (
            Question::SharedTeamSeasons {
                window,
                min_shared: MinCount::default(),
            },
            queries::SHARED_TEAM_SEASONS,
        ),
        (
            Question::TeamPath {
                player: a.clone(),
                window,
            },
            queries::TEAM_PATH_FOLLOWERS,
        ),
        (
            Question::ManagerTree {
                first: a.clone(),
                second: b.clone(),
            },
            queries::MANAGER_TREE,
        ),
    ];

    let app = MlbApp::new(RecordedGraph::new());
    for (question, expected) in &cases {
        let mut out = Vec::new();
        app.answer(&mut out, question).await.unwrap();
        assert_eq!(app.graph().last_query().unwrap().name, *expected);
        assert!(!out.is_empty());
    }
    assert_eq!(app.graph().executed().len(), cases.len());
}

#[tokio::test]
async fn test_json_rows_round_trip_through_facade() {
    let row = json!({
        "manager": "Dave Roberts",
        "player1": "A", "player_id1": "a01",
        "player2": "B", "player_id2": "b01",
        "team1": "LAN", "year1": 2021,
        "team2": "LAN", "year2": 2023
    });
    let graph = RecordedGraph::new().with_rows(queries::MANAGER_TREE, vec![row.clone()]);
    let app = MlbApp::new(graph).with_format(OutputFormat::Json);
    let mut out = Vec::new();

    app.manager_tree_connection(
        &mut out,
        &PlayerId::new("a01"),
        &PlayerId::new("b01"),
    )
    .await
    .unwrap();

    let parsed: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed, json!([row]));
}

#[tokio::test]
async fn test_repeated_summary_is_stable() {
    let row = json!({
        "team": "Houston Astros", "team_id": "HOU", "year": 2022,
        "division": "W", "rank": 1, "wins": 106, "losses": 56,
        "runs": 737, "home_runs": 214, "attendance": 2688998
    });
    let graph = RecordedGraph::new().with_rows(queries::TEAM_SEASON_SUMMARY, vec![row]);
    let app = MlbApp::new(graph);
    let team = TeamId::new("hou");

    let mut first = Vec::new();
    let mut second = Vec::new();
    app.team_season_summary(&mut first, &team, Year::new(2022))
        .await
        .unwrap();
    app.team_season_summary(&mut second, &team, Year::new(2022))
        .await
        .unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("Season summary for Houston Astros (HOU) in 2022:"));
    assert!(text.contains("  Attendance: 2688998"));
}
