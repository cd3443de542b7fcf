//! Standings table and the season-file loader.

use crate::models::team::{Team, TeamIndex};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Errors that can occur while loading or querying a division.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DivisionError {
    /// The season file (or a team record) does not follow the expected format.
    /// `line` is 1-based; the team count sits on line 1.
    MalformedInput { line: usize, reason: String },
    /// No team with this name exists in the table.
    UnknownTeam(String),
    /// Elimination needs at least two teams.
    DegenerateDivision { teams: usize },
    /// The season file could not be read.
    Io(String),
    /// A flow network admitted an augmenting path without any finite edge.
    UnboundedFlow,
}

impl DivisionError {
    fn malformed(line: usize, reason: impl Into<String>) -> Self {
        DivisionError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for DivisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionError::MalformedInput { line, reason } => {
                write!(f, "Malformed input on line {}: {}", line, reason)
            }
            DivisionError::UnknownTeam(name) => write!(f, "Unknown team `{}`", name),
            DivisionError::DegenerateDivision { teams } => {
                write!(f, "A division needs at least 2 teams (got {})", teams)
            }
            DivisionError::Io(msg) => write!(f, "Could not read season file: {}", msg),
            DivisionError::UnboundedFlow => {
                write!(f, "Flow network has an unbounded augmenting path")
            }
        }
    }
}

impl std::error::Error for DivisionError {}

/// All teams of one division, in season-file order, with name lookup.
#[derive(Clone, Debug, Serialize)]
pub struct Standings {
    teams: Vec<Team>,
    #[serde(skip)]
    index: HashMap<String, TeamIndex>,
}

impl Standings {
    /// Build a table from team records. Row `i` is reported as line `i + 2` in errors,
    /// matching where it would sit in a season file.
    pub fn new(teams: Vec<Team>) -> Result<Self, DivisionError> {
        let lines: Vec<usize> = (0..teams.len()).map(|i| i + 2).collect();
        Self::assemble(teams, &lines)
    }

    /// Parse a season file:
    ///
    /// ```text
    /// <teamCount>
    /// <name> <wins> <losses> <remaining> <against_0> ... <against_{teamCount-1}>
    /// ```
    ///
    /// Blank lines are ignored.
    pub fn parse(input: &str) -> Result<Self, DivisionError> {
        let mut rows = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = rows
            .next()
            .ok_or_else(|| DivisionError::malformed(1, "missing team count"))?;
        let team_count: usize = header.parse().map_err(|_| {
            DivisionError::malformed(
                header_line,
                format!("team count `{}` is not an integer", header),
            )
        })?;
        if team_count < 2 {
            return Err(DivisionError::DegenerateDivision { teams: team_count });
        }

        // The declared count is untrusted; grow with the rows actually present.
        let mut teams = Vec::new();
        let mut lines = Vec::new();
        for (line, row) in rows {
            if teams.len() == team_count {
                return Err(DivisionError::malformed(
                    line,
                    format!("expected {} team rows, found more", team_count),
                ));
            }
            teams.push(parse_row(line, row, team_count)?);
            lines.push(line);
        }
        if teams.len() != team_count {
            let last = lines.last().copied().unwrap_or(header_line);
            return Err(DivisionError::malformed(
                last,
                format!("expected {} team rows, found {}", team_count, teams.len()),
            ));
        }

        Self::assemble(teams, &lines)
    }

    /// Read and parse a season file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DivisionError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DivisionError::Io(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
    }

    /// Cross-row checks shared by `new` and `parse`.
    /// `lines[i]` is the source line of `teams[i]`.
    fn assemble(teams: Vec<Team>, lines: &[usize]) -> Result<Self, DivisionError> {
        let count = teams.len();
        if count < 2 {
            return Err(DivisionError::DegenerateDivision { teams: count });
        }
        let mut index = HashMap::with_capacity(count);
        for (i, team) in teams.iter().enumerate() {
            let line = lines[i];
            if team.name.is_empty() || team.name.chars().any(char::is_whitespace) {
                return Err(DivisionError::malformed(
                    line,
                    format!("team name `{}` must be a single non-empty word", team.name),
                ));
            }
            if team.against.len() != count {
                return Err(DivisionError::malformed(
                    line,
                    format!(
                        "team `{}` lists {} head-to-head counts, expected {}",
                        team.name,
                        team.against.len(),
                        count
                    ),
                ));
            }
            if team.against[i] != 0 {
                return Err(DivisionError::malformed(
                    line,
                    format!(
                        "team `{}` has {} games against itself",
                        team.name, team.against[i]
                    ),
                ));
            }
            if index.insert(team.name.clone(), i).is_some() {
                return Err(DivisionError::malformed(
                    line,
                    format!("duplicate team name `{}`", team.name),
                ));
            }
        }
        for (j, later) in teams.iter().enumerate() {
            for (i, earlier) in teams[..j].iter().enumerate() {
                if earlier.against[j] != later.against[i] {
                    return Err(DivisionError::malformed(
                        lines[j],
                        format!(
                            "`{}` lists {} games against `{}`, but `{}` lists {}",
                            earlier.name,
                            earlier.against[j],
                            later.name,
                            later.name,
                            later.against[i]
                        ),
                    ));
                }
            }
        }
        Ok(Self { teams, index })
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Team names in table order.
    pub fn team_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|t| t.name.as_str())
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn index_of(&self, name: &str) -> Result<TeamIndex, DivisionError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DivisionError::UnknownTeam(name.to_string()))
    }

    pub fn team(&self, name: &str) -> Result<&Team, DivisionError> {
        Ok(&self.teams[self.index_of(name)?])
    }

    /// Team at a table position. Panics if `index >= team_count()`.
    pub fn team_at(&self, index: TeamIndex) -> &Team {
        &self.teams[index]
    }

    pub fn wins(&self, name: &str) -> Result<u32, DivisionError> {
        Ok(self.team(name)?.wins)
    }

    pub fn losses(&self, name: &str) -> Result<u32, DivisionError> {
        Ok(self.team(name)?.losses)
    }

    pub fn remaining(&self, name: &str) -> Result<u32, DivisionError> {
        Ok(self.team(name)?.remaining)
    }

    /// Remaining games between two teams. The matrix is symmetric, so either row answers.
    pub fn against(&self, team_1: &str, team_2: &str) -> Result<u32, DivisionError> {
        let first = self.index_of(team_1)?;
        let second = self.index_of(team_2)?;
        Ok(self.against_at(first, second))
    }

    pub(crate) fn against_at(&self, first: TeamIndex, second: TeamIndex) -> u32 {
        self.teams[first].against[second]
    }
}

impl FromStr for Standings {
    type Err = DivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_row(line: usize, row: &str, team_count: usize) -> Result<Team, DivisionError> {
    let fields: Vec<&str> = row.split_whitespace().collect();
    let expected = team_count.checked_add(4).ok_or_else(|| {
        DivisionError::malformed(line, format!("team count {} is too large", team_count))
    })?;
    if fields.len() != expected {
        return Err(DivisionError::malformed(
            line,
            format!("expected {} fields, found {}", expected, fields.len()),
        ));
    }
    let number = |i: usize, what: &str| -> Result<u32, DivisionError> {
        fields[i].parse::<u32>().map_err(|_| {
            DivisionError::malformed(
                line,
                format!("{} `{}` is not a non-negative integer", what, fields[i]),
            )
        })
    };
    let wins = number(1, "wins")?;
    let losses = number(2, "losses")?;
    let remaining = number(3, "remaining")?;
    let against = (4..expected)
        .map(|i| number(i, "head-to-head count"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Team::new(fields[0], wins, losses, remaining, against))
}
