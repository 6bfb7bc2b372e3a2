//! Interactive text menu.
//!
//! Reads a selection and its arguments line by line, asks the façade, and
//! repeats until `q` or end of input. Unparsable numbers end the session
//! with an error.

use std::io::{BufRead, Write};

use super::types::{MinCount, PlayerId, TeamId, Year, YearWindow};
use crate::{
    commands::{MlbApp, Question},
    graph::GraphSource,
    Result,
};

pub const BANNER: &str = "-=-=-=-=-= MLB Graph Demo =-=-=-=-=-";

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlayersOnTeam,
    TeamSeasonSummary,
    MultiTeamPlayers,
    ManagersAndParks,
    TeammatePath,
    SharedTeamSeasons,
    TeamPath,
    ManagerTree,
    Quit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "1" => MenuChoice::PlayersOnTeam,
            "2" => MenuChoice::TeamSeasonSummary,
            "3" => MenuChoice::MultiTeamPlayers,
            "4" => MenuChoice::ManagersAndParks,
            "5" => MenuChoice::TeammatePath,
            "6" => MenuChoice::SharedTeamSeasons,
            "7" => MenuChoice::TeamPath,
            "8" => MenuChoice::ManagerTree,
            "q" => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// The menu loop over any line reader and writer.
pub struct Menu<R, W> {
    input: R,
    out: W,
    window: YearWindow,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// `window` is used for the questions that span several seasons.
    pub fn new(input: R, out: W, window: YearWindow) -> Self {
        Self { input, out, window }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out, "1. List players on a team for a given year")?;
        writeln!(self.out, "2. Show team season summary")?;
        writeln!(
            self.out,
            "3. Find players who played for multiple teams ({})",
            self.window
        )?;
        writeln!(self.out, "4. Show managers and parks for a team & year")?;
        writeln!(
            self.out,
            "5. How are two players connected by teammates? (shortest teammate path)"
        )?;
        writeln!(self.out, "6. Which player pairs shared multiple teams and seasons?")?;
        writeln!(
            self.out,
            "7. Show a player's ordered team path and others with the same path"
        )?;
        writeln!(self.out, "8. Show manager-tree connections between two players")?;
        writeln!(self.out, "q. Quit")?;
        Ok(())
    }

    /// Print `label` and read one line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_team(&mut self) -> Result<Option<TeamId>> {
        Ok(self
            .prompt("Enter teamID (e.g. 'BOS'): ")?
            .map(|s| TeamId::new(&s)))
    }

    fn prompt_year(&mut self) -> Result<Option<Year>> {
        self.prompt("Enter year (e.g. 2023): ")?
            .map(|s| s.parse())
            .transpose()
    }

    fn prompt_player(&mut self, label: &str) -> Result<Option<PlayerId>> {
        Ok(self.prompt(label)?.map(|s| PlayerId::new(&s)))
    }

    fn prompt_min_count(&mut self, label: &str) -> Result<Option<MinCount>> {
        self.prompt(label)?
            .map(|s| MinCount::parse_or_default(&s))
            .transpose()
    }

    /// Collect the arguments for `choice`. `None` when input ran out midway.
    pub fn read_question(&mut self, choice: MenuChoice) -> Result<Option<Question>> {
        let question = match choice {
            MenuChoice::PlayersOnTeam => {
                let Some(team) = self.prompt_team()? else { return Ok(None) };
                let Some(year) = self.prompt_year()? else { return Ok(None) };
                Question::PlayersOnTeam { team, year }
            }
            MenuChoice::TeamSeasonSummary => {
                let Some(team) = self.prompt_team()? else { return Ok(None) };
                let Some(year) = self.prompt_year()? else { return Ok(None) };
                Question::TeamSeasonSummary { team, year }
            }
            MenuChoice::MultiTeamPlayers => {
                let Some(min_team_seasons) =
                    self.prompt_min_count("Minimum number of team-seasons (default 2): ")?
                else {
                    return Ok(None);
                };
                Question::MultiTeamPlayers {
                    window: self.window,
                    min_team_seasons,
                }
            }
            MenuChoice::ManagersAndParks => {
                let Some(team) = self.prompt_team()? else { return Ok(None) };
                let Some(year) = self.prompt_year()? else { return Ok(None) };
                Question::ManagersAndParks { team, year }
            }
            MenuChoice::TeammatePath => {
                let Some(from) = self.prompt_player("Enter first playerID: ")? else {
                    return Ok(None);
                };
                let Some(to) = self.prompt_player("Enter second playerID: ")? else {
                    return Ok(None);
                };
                Question::TeammatePath { from, to }
            }
            MenuChoice::SharedTeamSeasons => {
                let Some(min_shared) =
                    self.prompt_min_count("Minimum shared team-seasons (default 2): ")?
                else {
                    return Ok(None);
                };
                Question::SharedTeamSeasons {
                    window: self.window,
                    min_shared,
                }
            }
            MenuChoice::TeamPath => {
                let Some(player) = self.prompt_player("Enter playerID: ")? else {
                    return Ok(None);
                };
                Question::TeamPath {
                    player,
                    window: self.window,
                }
            }
            MenuChoice::ManagerTree => {
                let Some(first) = self.prompt_player("Enter first playerID: ")? else {
                    return Ok(None);
                };
                let Some(second) = self.prompt_player("Enter second playerID: ")? else {
                    return Ok(None);
                };
                Question::ManagerTree { first, second }
            }
            MenuChoice::Quit | MenuChoice::Invalid => return Ok(None),
        };
        Ok(Some(question))
    }

    fn goodbye(&mut self) -> Result<()> {
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Run until the user quits or the input ends.
    pub async fn run<G: GraphSource>(&mut self, app: &MlbApp<G>) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(selection) = self.prompt("Select an option: ")? else {
                return self.goodbye();
            };

            match MenuChoice::parse(&selection) {
                MenuChoice::Quit => return self.goodbye(),
                MenuChoice::Invalid => {
                    writeln!(self.out, "Invalid option. Please try again.\n")?;
                }
                choice => match self.read_question(choice)? {
                    Some(question) => {
                        tracing::debug!(?question, "menu selection");
                        app.answer(&mut self.out, &question).await?;
                    }
                    None => return self.goodbye(),
                },
            }
        }
    }
}
