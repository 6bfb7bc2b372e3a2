//! Cypher for each supported question.
//!
//! All traversal, aggregation, de-duplication and ordering happen in the
//! database. Inputs are always bound as parameters; only compile-time
//! constants are formatted into the query text.

use super::CypherQuery;
use crate::cli::types::{MinCount, PlayerId, TeamId, Year, YearWindow};

/// Relationship types linking a player to a team season they appeared in.
pub const PARTICIPATION: &str = "BATTED_FOR|PITCHED_FOR|FIELDED_FOR";
/// Upper bound on hops for the teammate shortest path.
pub const MAX_TEAMMATE_HOPS: u32 = 6;
/// Row cap for the aggregate listings.
pub const RESULT_LIMIT: u32 = 50;

pub const PLAYERS_ON_TEAM: &str = "players_on_team_in_year";
pub const TEAM_SEASON_SUMMARY: &str = "team_season_summary";
pub const MULTI_TEAM_PLAYERS: &str = "multi_team_players";
pub const MANAGERS_AND_PARKS: &str = "managers_and_parks";
pub const SHORTEST_TEAMMATE_PATH: &str = "shortest_teammate_path";
pub const SHARED_TEAM_SEASONS: &str = "shared_team_seasons";
pub const TEAM_PATH_FOLLOWERS: &str = "team_path_followers";
pub const MANAGER_TREE: &str = "manager_tree_connection";

/// Players who batted, pitched or fielded for a team in one season.
pub fn players_on_team_in_year(team: &TeamId, year: Year) -> CypherQuery {
    let text = format!(
        "MATCH (t:Team {{teamID: $team_id}})-[:PLAYED_IN_SEASON]->(ts:TeamSeason)
         WHERE ts.year = $year
         MATCH (p:Player)-[:{PARTICIPATION}]->(ts)
         RETURN DISTINCT p.playerID AS player_id,
                coalesce(p.name, p.playerID) AS name,
                t.name AS team,
                ts.year AS year
         ORDER BY name, player_id"
    );
    CypherQuery::new(PLAYERS_ON_TEAM, text)
        .param("team_id", team.as_str())
        .param("year", year.as_i64())
}

/// Season stats are coerced engine-side: loaders may store them as floats or
/// strings, and unconvertible values come back as null.
pub fn team_season_summary(team: &TeamId, year: Year) -> CypherQuery {
    let text = "MATCH (t:Team {teamID: $team_id})-[:PLAYED_IN_SEASON]->(ts:TeamSeason)
         WHERE ts.year = $year
         RETURN t.name                   AS team,
                t.teamID                 AS team_id,
                ts.year                  AS year,
                toString(ts.division)    AS division,
                toInteger(ts.rank)       AS rank,
                toInteger(ts.wins)       AS wins,
                toInteger(ts.losses)     AS losses,
                toInteger(ts.runs)       AS runs,
                toInteger(ts.homeRuns)   AS home_runs,
                toInteger(ts.attendance) AS attendance
         LIMIT 1";
    CypherQuery::new(TEAM_SEASON_SUMMARY, text)
        .param("team_id", team.as_str())
        .param("year", year.as_i64())
}

/// Players with at least `min_team_seasons` distinct team seasons in the window.
pub fn multi_team_players(window: YearWindow, min_team_seasons: MinCount) -> CypherQuery {
    let text = format!(
        "MATCH (p:Player)-[:{PARTICIPATION}]->(ts:TeamSeason)
         WHERE ts.year >= $start_year AND ts.year <= $end_year
         WITH p, collect(DISTINCT ts) AS team_seasons
         WHERE size(team_seasons) >= $min_team_seasons
         RETURN coalesce(p.name, p.playerID) AS player,
                p.playerID AS player_id,
                size(team_seasons) AS team_seasons
         ORDER BY team_seasons DESC, player, player_id
         LIMIT {RESULT_LIMIT}"
    );
    CypherQuery::new(MULTI_TEAM_PLAYERS, text)
        .param("start_year", window.start().as_i64())
        .param("end_year", window.end().as_i64())
        .param("min_team_seasons", min_team_seasons.as_i64())
}

/// Managers and home parks for a team season. Both sides are optional so a
/// matched season always yields one row.
pub fn managers_and_parks(team: &TeamId, year: Year) -> CypherQuery {
    let text = "MATCH (t:Team {teamID: $team_id})-[:PLAYED_IN_SEASON]->(ts:TeamSeason)
         WHERE ts.year = $year
         OPTIONAL MATCH (m:Manager)-[:MANAGED]->(ts)
         OPTIONAL MATCH (ts)-[:PLAYED_HOME_GAMES_AT]->(pk:Park)
         RETURN t.name AS team,
                ts.year AS year,
                collect(DISTINCT coalesce(m.name, m.managerID)) AS managers,
                collect(DISTINCT pk.name) AS parks";
    CypherQuery::new(MANAGERS_AND_PARKS, text)
        .param("team_id", team.as_str())
        .param("year", year.as_i64())
}

/// Shortest path over `TEAMMATE_WITH`, projected into labels and display names.
///
/// The lower bound of zero lets the same player on both ends return a
/// single-node path instead of nothing.
pub fn shortest_teammate_path(from: &PlayerId, to: &PlayerId) -> CypherQuery {
    let text = format!(
        "MATCH (p1:Player {{playerID: $p1}}), (p2:Player {{playerID: $p2}})
         MATCH path = shortestPath((p1)-[:TEAMMATE_WITH*0..{MAX_TEAMMATE_HOPS}]-(p2))
         RETURN [n IN nodes(path) | {{
                    labels: labels(n),
                    name: coalesce(n.name, n.playerID, n.teamID, '(no name)')
                }}] AS nodes,
                [r IN relationships(path) | type(r)] AS relationships"
    );
    CypherQuery::new(SHORTEST_TEAMMATE_PATH, text)
        .param("p1", from.as_str())
        .param("p2", to.as_str())
}

/// Player pairs sharing at least `min_shared` team seasons in the window.
///
/// `p1.playerID < p2.playerID` keeps each unordered pair exactly once.
pub fn shared_team_seasons(window: YearWindow, min_shared: MinCount) -> CypherQuery {
    let text = format!(
        "MATCH (p1:Player)-[:{PARTICIPATION}]->(ts:TeamSeason)<-[:{PARTICIPATION}]-(p2:Player)
         WHERE ts.year >= $start_year AND ts.year <= $end_year
           AND p1.playerID < p2.playerID
         WITH p1, p2, ts
         ORDER BY ts.year, ts.teamID
         WITH p1, p2, collect(DISTINCT ts) AS shared_ts
         WHERE size(shared_ts) >= $min_shared
         RETURN coalesce(p1.name, p1.playerID) AS player1,
                p1.playerID AS player_id1,
                coalesce(p2.name, p2.playerID) AS player2,
                p2.playerID AS player_id2,
                size(shared_ts) AS shared_count,
                [s IN shared_ts | {{team_id: s.teamID, year: s.year}}] AS shared_seasons
         ORDER BY shared_count DESC, player1, player2, player_id1, player_id2
         LIMIT {RESULT_LIMIT}"
    );
    CypherQuery::new(SHARED_TEAM_SEASONS, text)
        .param("start_year", window.start().as_i64())
        .param("end_year", window.end().as_i64())
        .param("min_shared", min_shared.as_i64())
}

/// The player's team sequence in the window plus every other player whose
/// team sequence is identical. Only team codes are compared, not years.
///
/// Followers are gathered in a subquery so the target row survives when
/// nobody shares the path.
pub fn team_path_followers(player: &PlayerId, window: YearWindow) -> CypherQuery {
    let text = format!(
        "MATCH (p:Player {{playerID: $player_id}})-[:{PARTICIPATION}]->(ts:TeamSeason)
         WHERE ts.year >= $start_year AND ts.year <= $end_year
         WITH p, ts
         ORDER BY ts.year, ts.teamID
         WITH p, collect(DISTINCT ts) AS ts_list
         WITH p,
              [s IN ts_list | s.teamID] AS team_sequence,
              [s IN ts_list | s.year] AS year_sequence
         CALL {{
             WITH p, team_sequence
             MATCH (other:Player)-[:{PARTICIPATION}]->(ots:TeamSeason)
             WHERE other <> p AND ots.year >= $start_year AND ots.year <= $end_year
             WITH team_sequence, other, ots
             ORDER BY other.playerID, ots.year, ots.teamID
             WITH team_sequence, other, collect(DISTINCT ots) AS other_ts_list
             WHERE [s IN other_ts_list | s.teamID] = team_sequence
             RETURN collect({{
                        name: coalesce(other.name, other.playerID),
                        player_id: other.playerID
                    }}) AS followers
         }}
         RETURN coalesce(p.name, p.playerID) AS player,
                p.playerID AS player_id,
                team_sequence,
                year_sequence,
                followers"
    );
    CypherQuery::new(TEAM_PATH_FOLLOWERS, text)
        .param("player_id", player.as_str())
        .param("start_year", window.start().as_i64())
        .param("end_year", window.end().as_i64())
}

/// Managers who managed a season with player A and a different season with player B.
pub fn manager_tree_connection(first: &PlayerId, second: &PlayerId) -> CypherQuery {
    let text = format!(
        "MATCH (p1:Player {{playerID: $p1}})-[:{PARTICIPATION}]->(ts1:TeamSeason)
               <-[:MANAGED]-(m:Manager)-[:MANAGED]->(ts2:TeamSeason)
               <-[:{PARTICIPATION}]-(p2:Player {{playerID: $p2}})
         WHERE ts1 <> ts2
         RETURN DISTINCT
                coalesce(m.name, m.managerID) AS manager,
                coalesce(p1.name, p1.playerID) AS player1,
                p1.playerID AS player_id1,
                coalesce(p2.name, p2.playerID) AS player2,
                p2.playerID AS player_id2,
                ts1.teamID AS team1, ts1.year AS year1,
                ts2.teamID AS team2, ts2.year AS year2
         ORDER BY manager, year1, year2, team1, team2"
    );
    CypherQuery::new(MANAGER_TREE, text)
        .param("p1", first.as_str())
        .param("p2", second.as_str())
}
