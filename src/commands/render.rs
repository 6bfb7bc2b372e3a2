//! Text reports for each question.
//!
//! Every function receives the rows exactly as the database returned them
//! and prints a "not found" notice when there are none.

use std::io::{self, Write};

use crate::cli::types::{MinCount, PlayerId, TeamId, Year, YearWindow};
use crate::graph::{
    ManagerLink, ManagersAndParks, MultiTeamPlayer, RosterEntry, SeasonSummary,
    SharedSeasonPair, TeamPath, TeammatePath,
};

const NONE_RECORDED: &str = "    (none recorded)";
const NOT_AVAILABLE: &str = "n/a";

fn or_na<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn players_on_team<W: Write>(
    out: &mut W,
    team: &TeamId,
    year: Year,
    rows: &[RosterEntry],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "\nNo players found for team {} in {}.\n", team, year);
    }

    writeln!(out, "\nPlayers for team {} in {}:\n", team, year)?;
    for r in rows {
        writeln!(out, "    {} ({})", r.name, r.player_id)?;
    }
    writeln!(out)
}

pub fn team_season_summary<W: Write>(
    out: &mut W,
    team: &TeamId,
    year: Year,
    rows: &[SeasonSummary],
) -> io::Result<()> {
    let Some(r) = rows.first() else {
        return writeln!(
            out,
            "\nNo season summary found for team {} in {}.\n",
            team, year
        );
    };

    let name = r.team.as_deref().unwrap_or(r.team_id.as_str());
    writeln!(out, "\nSeason summary for {} ({}) in {}:", name, r.team_id, r.year)?;
    writeln!(out, "  Division:   {}", or_na(&r.division))?;
    writeln!(out, "  Rank:       {}", or_na(&r.rank))?;
    writeln!(out, "  Wins:       {}", or_na(&r.wins))?;
    writeln!(out, "  Losses:     {}", or_na(&r.losses))?;
    writeln!(out, "  Runs:       {}", or_na(&r.runs))?;
    writeln!(out, "  Home Runs:  {}", or_na(&r.home_runs))?;
    writeln!(out, "  Attendance: {}", or_na(&r.attendance))?;
    writeln!(out)
}

pub fn multi_team_players<W: Write>(
    out: &mut W,
    window: YearWindow,
    min_team_seasons: MinCount,
    rows: &[MultiTeamPlayer],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(
            out,
            "\nNo players found with at least {} team-seasons between {}.\n",
            min_team_seasons, window
        );
    }

    writeln!(
        out,
        "\nPlayers with ≥ {} team-seasons between {}:\n",
        min_team_seasons, window
    )?;
    for r in rows {
        writeln!(
            out,
            "  {} ({}) — {} team-seasons",
            r.player, r.player_id, r.team_seasons
        )?;
    }
    writeln!(out)
}

fn bullet_list<W: Write>(out: &mut W, items: &[&str]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "{}", NONE_RECORDED);
    }
    for item in items {
        writeln!(out, "    - {}", item)?;
    }
    Ok(())
}

pub fn managers_and_parks<W: Write>(
    out: &mut W,
    team: &TeamId,
    year: Year,
    rows: &[ManagersAndParks],
) -> io::Result<()> {
    let Some(r) = rows.first() else {
        return writeln!(out, "\nNo data found for team {} in {}.\n", team, year);
    };

    let name = r.team.clone().unwrap_or_else(|| team.to_string());
    writeln!(out, "\nManagers and parks for {} in {}:\n", name, r.year)?;

    writeln!(out, "  Managers:")?;
    bullet_list(out, &r.managers())?;

    writeln!(out, "\n  Home Parks:")?;
    bullet_list(out, &r.parks())?;
    writeln!(out)
}

pub fn teammate_path<W: Write>(
    out: &mut W,
    from: &PlayerId,
    to: &PlayerId,
    rows: &[TeammatePath],
) -> io::Result<()> {
    let Some(path) = rows.first().filter(|p| !p.nodes.is_empty()) else {
        return writeln!(out, "\nNo path found between {} and {}.\n", from, to);
    };

    writeln!(
        out,
        "\nShortest teammate path between {} and {} ({} hops):\n",
        from,
        to,
        path.hops()
    )?;
    for (i, node) in path.nodes.iter().enumerate() {
        writeln!(out, "  Node {}: {} — {}", i, node.labels.join(","), node.name)?;
        if let Some(rel) = path.relationships.get(i) {
            writeln!(out, "    |")?;
            writeln!(out, "    +--[{}]-->", rel)?;
        }
    }
    if path.hops() == 0 {
        writeln!(out, "    (same player, 0 hops)")?;
    }
    writeln!(out)
}

pub fn shared_team_seasons<W: Write>(
    out: &mut W,
    window: YearWindow,
    min_shared: MinCount,
    rows: &[SharedSeasonPair],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(
            out,
            "\nNo player pairs found with at least {} shared team-seasons between {}.\n",
            min_shared, window
        );
    }

    writeln!(
        out,
        "\nPlayer pairs with ≥ {} shared team-seasons between {}:\n",
        min_shared, window
    )?;
    for r in rows {
        let shared = r
            .shared_seasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "  {} ({})  &  {} ({})",
            r.player1, r.player_id1, r.player2, r.player_id2
        )?;
        writeln!(out, "    - Shared seasons: {} [{}]", r.shared_count, shared)?;
    }
    writeln!(out)
}

pub fn team_path<W: Write>(
    out: &mut W,
    player: &PlayerId,
    window: YearWindow,
    rows: &[TeamPath],
) -> io::Result<()> {
    let Some(r) = rows.first().filter(|r| !r.team_sequence.is_empty()) else {
        return writeln!(
            out,
            "\nPlayer {} has no team history between {}.\n",
            player, window
        );
    };

    writeln!(
        out,
        "\nOrdered team path for {} ({}) between {}:\n",
        r.player, r.player_id, window
    )?;
    let steps = r
        .steps()
        .map(|(year, team)| format!("{}:{}", year, team))
        .collect::<Vec<_>>();
    writeln!(out, "  Path: {}", steps.join("  ->  "))?;

    writeln!(out, "\nPlayers who followed the same development path:")?;
    if r.followers.is_empty() {
        writeln!(out, "  (no other players with the exact same path)")?;
    } else {
        for f in &r.followers {
            writeln!(out, "  - {} ({})", f.name, f.player_id)?;
        }
    }
    writeln!(out)
}

pub fn manager_tree<W: Write>(
    out: &mut W,
    first: &PlayerId,
    second: &PlayerId,
    rows: &[ManagerLink],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(
            out,
            "\nNo manager-tree connection found between {} and {}.\n",
            first, second
        );
    }

    writeln!(
        out,
        "\nManager tree connections between {} and {}:\n",
        first, second
    )?;
    for r in rows {
        writeln!(out, "  Manager: {}", r.manager)?;
        writeln!(
            out,
            "    - {} ({}) with {} in {}",
            r.player1, r.player_id1, r.team1, r.year1
        )?;
        writeln!(
            out,
            "    - {} ({}) with {} in {}",
            r.player2, r.player_id2, r.team2, r.year2
        )?;
        writeln!(out)?;
    }
    writeln!(out)
}
