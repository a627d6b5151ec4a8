//! Strict parser for generated mapping files
//!
//! emit이 만드는 문법만 받아들이는 라인 단위 파서. 받아들인 텍스트는
//! `render_mapping`으로 바이트 단위 동일하게 복원된다. 문법을 벗어나는
//! 줄은 라인 번호를 붙여 즉시 에러로 끝낸다. 정규식 패치 없이
//! 파싱 → 변환 → 재렌더링이 전체 파이프라인의 편집 방식이다.

use crate::emit::IMPORT_HEADER;
use crate::error::{Result, RosterError};
use crate::models::team::derive_identifier;
use crate::models::{MappingFile, PlayerRecord, TeamInfo, TeamRoster};

/// Parse a mapping file back into its document form
///
/// Guarantees: `render_mapping(&parse_mapping(text)?) == text` for any
/// text this function accepts.
pub fn parse_mapping(text: &str) -> Result<MappingFile> {
    if let Some(pos) = text.find('\r') {
        let line = text[..pos].matches('\n').count() + 1;
        return Err(RosterError::parse(
            line,
            "carriage return line endings are not supported",
        ));
    }
    if !text.ends_with('\n') {
        let line = text.matches('\n').count() + 1;
        return Err(RosterError::parse(line, "missing trailing newline"));
    }

    let mut lines = Lines::new(text);

    lines.expect(IMPORT_HEADER)?;
    lines.expect_blank()?;

    let (header_line, header) = lines.next_required("league header comment")?;
    let (league_name, league_korean_name) = parse_league_header(header, header_line)?;

    let (totals_line, totals) = lines.next_required("totals comment")?;
    let (total_players, total_teams) = parse_totals(totals, totals_line)?;

    lines.expect_blank()?;

    let mut teams: Vec<TeamRoster> = Vec::new();
    loop {
        let (line_no, line) = lines.next_required("team block or combined export")?;
        if let Some(comment) = line.strip_prefix("// ") {
            if comment.contains(" - Team ID: ") {
                teams.push(parse_team_block(&mut lines, comment, line_no)?);
                lines.expect_blank()?;
                continue;
            }
            if let Some(korean) = comment.strip_suffix(" 전체 선수 통합") {
                parse_combined_block(
                    &mut lines,
                    korean,
                    line_no,
                    &league_name,
                    &league_korean_name,
                    &teams,
                )?;
                break;
            }
        }
        return Err(RosterError::parse(
            line_no,
            format!("unexpected line: `{}`", line),
        ));
    }

    if let Some((line_no, line)) = lines.next() {
        return Err(RosterError::parse(
            line_no,
            format!("unexpected content after combined export: `{}`", line),
        ));
    }

    let doc = MappingFile {
        league_name,
        league_korean_name,
        teams,
    };

    if doc.total_players() != total_players || doc.rendered_team_count() != total_teams {
        return Err(RosterError::parse(
            totals_line,
            format!(
                "totals comment says {} players across {} teams, file contains {} across {}",
                total_players,
                total_teams,
                doc.total_players(),
                doc.rendered_team_count()
            ),
        ));
    }

    Ok(doc)
}

// =============================================================================
// Line cursor
// =============================================================================

struct Lines<'a> {
    rows: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        let mut rows: Vec<&str> = text.split('\n').collect();
        // the caller guaranteed a trailing newline, drop the piece after it
        rows.pop();
        Self { rows, pos: 0 }
    }

    /// 1-based line number alongside the line itself
    fn next(&mut self) -> Option<(usize, &'a str)> {
        let line = *self.rows.get(self.pos)?;
        self.pos += 1;
        Some((self.pos, line))
    }

    fn next_required(&mut self, what: &str) -> Result<(usize, &'a str)> {
        let line_no = self.pos + 1;
        self.next().ok_or_else(|| {
            RosterError::parse(line_no, format!("unexpected end of file, expected {}", what))
        })
    }

    fn expect(&mut self, expected: &str) -> Result<()> {
        let (line_no, line) = self.next_required(&format!("`{}`", expected))?;
        if line != expected {
            return Err(RosterError::parse(
                line_no,
                format!("expected `{}`, found `{}`", expected, line),
            ));
        }
        Ok(())
    }

    fn expect_blank(&mut self) -> Result<()> {
        let (line_no, line) = self.next_required("blank line")?;
        if !line.is_empty() {
            return Err(RosterError::parse(
                line_no,
                format!("expected blank line, found `{}`", line),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Header lines
// =============================================================================

fn parse_league_header(line: &str, line_no: usize) -> Result<(String, String)> {
    let body = line
        .strip_prefix("// ")
        .and_then(|s| s.strip_suffix(" Player Mappings"))
        .ok_or_else(|| {
            RosterError::parse(line_no, "expected `// <league> (<korean>) Player Mappings`")
        })?;
    let (name, korean) = body
        .rsplit_once(" (")
        .and_then(|(name, korean)| korean.strip_suffix(')').map(|k| (name, k)))
        .ok_or_else(|| RosterError::parse(line_no, "league header is missing the Korean name"))?;
    if name.is_empty() || korean.is_empty() {
        return Err(RosterError::parse(line_no, "league names must not be empty"));
    }
    Ok((name.to_string(), korean.to_string()))
}

fn parse_totals(line: &str, line_no: usize) -> Result<(usize, usize)> {
    let body = line.strip_prefix("// Total: ").ok_or_else(|| {
        RosterError::parse(line_no, "expected `// Total: <n> players across <m> teams`")
    })?;
    let (players, teams) = body
        .split_once(" players across ")
        .and_then(|(p, rest)| rest.strip_suffix(" teams").map(|t| (p, t)))
        .ok_or_else(|| {
            RosterError::parse(line_no, "expected `// Total: <n> players across <m> teams`")
        })?;
    let players = players
        .parse()
        .map_err(|_| RosterError::parse(line_no, format!("invalid player total `{}`", players)))?;
    let teams = teams
        .parse()
        .map_err(|_| RosterError::parse(line_no, format!("invalid team total `{}`", teams)))?;
    Ok((players, teams))
}

// =============================================================================
// Team blocks
// =============================================================================

fn parse_team_block<'a>(
    lines: &mut Lines<'a>,
    comment: &str,
    comment_line: usize,
) -> Result<TeamRoster> {
    // "{name} ({korean}) - Team ID: {id} - {n}명"
    let (display, tail) = comment
        .split_once(" - Team ID: ")
        .ok_or_else(|| RosterError::parse(comment_line, "malformed team comment"))?;
    let (name, korean) = display
        .rsplit_once(" (")
        .and_then(|(name, korean)| korean.strip_suffix(')').map(|k| (name, k)))
        .ok_or_else(|| {
            RosterError::parse(comment_line, "team comment is missing the Korean name")
        })?;
    let (id_str, count_str) = tail
        .split_once(" - ")
        .ok_or_else(|| RosterError::parse(comment_line, "team comment is missing the player count"))?;
    let team_id: i64 = id_str
        .parse()
        .map_err(|_| RosterError::parse(comment_line, format!("invalid team id `{}`", id_str)))?;
    let declared: usize = count_str
        .strip_suffix("명")
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| {
            RosterError::parse(comment_line, format!("invalid player count `{}`", count_str))
        })?;

    let team = TeamInfo {
        team_id,
        name: name.to_string(),
        korean_name: korean.to_string(),
    };

    let (decl_line, decl) = lines.next_required("team constant declaration")?;
    let const_name = decl
        .strip_prefix("export const ")
        .and_then(|s| s.strip_suffix(": PlayerMapping[] = ["))
        .ok_or_else(|| {
            RosterError::parse(decl_line, "expected `export const <NAME>: PlayerMapping[] = [`")
        })?;
    if const_name != team.const_name() {
        return Err(RosterError::parse(
            decl_line,
            format!(
                "constant `{}` does not match team `{}` (expected `{}`)",
                const_name,
                team.name,
                team.const_name()
            ),
        ));
    }

    let mut roster = TeamRoster::new(team);
    loop {
        let (line_no, line) = lines.next_required("player line or `];`")?;
        if line == "];" {
            break;
        }
        roster.players.push(parse_player_line(line, line_no)?);
    }

    if roster.players.is_empty() {
        return Err(RosterError::parse(
            comment_line,
            "team block has no players (empty teams are never rendered)",
        ));
    }
    if roster.players.len() != declared {
        return Err(RosterError::parse(
            comment_line,
            format!(
                "team comment says {}명, block contains {} players",
                declared,
                roster.players.len()
            ),
        ));
    }
    Ok(roster)
}

fn parse_combined_block(
    lines: &mut Lines<'_>,
    korean: &str,
    comment_line: usize,
    league_name: &str,
    league_korean_name: &str,
    teams: &[TeamRoster],
) -> Result<()> {
    if korean != league_korean_name {
        return Err(RosterError::parse(
            comment_line,
            format!(
                "combined comment names `{}`, league header names `{}`",
                korean, league_korean_name
            ),
        ));
    }

    let (decl_line, decl) = lines.next_required("combined constant declaration")?;
    let const_name = decl
        .strip_prefix("export const ")
        .and_then(|s| s.strip_suffix(": PlayerMapping[] = ["))
        .ok_or_else(|| {
            RosterError::parse(decl_line, "expected `export const <NAME>: PlayerMapping[] = [`")
        })?;
    let expected = format!("{}_PLAYERS", derive_identifier(league_name));
    if const_name != expected {
        return Err(RosterError::parse(
            decl_line,
            format!("combined constant `{}`, expected `{}`", const_name, expected),
        ));
    }

    let mut spreads: Vec<(usize, String)> = Vec::new();
    loop {
        let (line_no, line) = lines.next_required("spread line or `];`")?;
        if line == "];" {
            break;
        }
        let name = line
            .strip_prefix("  ...")
            .and_then(|s| s.strip_suffix(','))
            .ok_or_else(|| RosterError::parse(line_no, "expected `  ...<CONST>,`"))?;
        spreads.push((line_no, name.to_string()));
    }

    for (index, (line_no, name)) in spreads.iter().enumerate() {
        match teams.get(index) {
            Some(roster) if *name == roster.team.const_name() => {}
            Some(roster) => {
                return Err(RosterError::parse(
                    *line_no,
                    format!(
                        "spread `...{}` out of order, expected `...{}`",
                        name,
                        roster.team.const_name()
                    ),
                ));
            }
            None => {
                return Err(RosterError::parse(
                    *line_no,
                    format!("spread `...{}` has no matching team constant", name),
                ));
            }
        }
    }
    if spreads.len() < teams.len() {
        return Err(RosterError::parse(
            comment_line,
            format!(
                "combined export lists {} constants, file defines {}",
                spreads.len(),
                teams.len()
            ),
        ));
    }

    Ok(())
}

// =============================================================================
// Player lines
// =============================================================================

fn parse_player_line(line: &str, line_no: usize) -> Result<PlayerRecord> {
    let mut c = Cursor::new(line, line_no);
    c.eat("  { id: ")?;
    let id = c.take_i64()?;
    c.eat(", name: ")?;
    let name = c.take_quoted()?;
    c.eat(", korean_name: ")?;
    let korean_name = c.take_opt_quoted()?;
    c.eat(", team_id: ")?;
    let team_id = c.take_i64()?;
    c.eat(", position: ")?;
    let position = c.take_opt_quoted()?;
    c.eat(", number: ")?;
    let number = c.take_opt_i64()?;
    c.eat(", age: ")?;
    let age = c.take_opt_i64()?;
    c.eat(" },")?;
    c.finish()?;
    Ok(PlayerRecord {
        id,
        name,
        korean_name,
        team_id,
        position,
        number,
        age,
    })
}

struct Cursor<'a> {
    rest: &'a str,
    line_no: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str, line_no: usize) -> Self {
        Self { rest: line, line_no }
    }

    fn snippet(&self) -> String {
        self.rest.chars().take(24).collect()
    }

    fn eat(&mut self, lit: &str) -> Result<()> {
        match self.rest.strip_prefix(lit) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(RosterError::parse(
                self.line_no,
                format!("expected `{}` at `{}`", lit, self.snippet()),
            )),
        }
    }

    fn try_eat(&mut self, lit: &str) -> bool {
        match self.rest.strip_prefix(lit) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn take_i64(&mut self) -> Result<i64> {
        let bytes = self.rest.as_bytes();
        let mut end = 0;
        if bytes.first() == Some(&b'-') {
            end = 1;
        }
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let (digits, rest) = self.rest.split_at(end);
        let value = digits.parse::<i64>().map_err(|_| {
            RosterError::parse(
                self.line_no,
                format!("invalid integer at `{}`", self.snippet()),
            )
        })?;
        self.rest = rest;
        Ok(value)
    }

    fn take_opt_i64(&mut self) -> Result<Option<i64>> {
        if self.try_eat("null") {
            Ok(None)
        } else {
            self.take_i64().map(Some)
        }
    }

    /// Double-quoted string with `\\` and `\"` as the only escapes
    fn take_quoted(&mut self) -> Result<String> {
        self.eat("\"")?;
        let mut out = String::new();
        let mut chars = self.rest.char_indices();
        while let Some((i, ch)) = chars.next() {
            match ch {
                '"' => {
                    self.rest = &self.rest[i + 1..];
                    return Ok(out);
                }
                '\\' => match chars.next() {
                    Some((_, '\\')) => out.push('\\'),
                    Some((_, '"')) => out.push('"'),
                    Some((_, other)) => {
                        return Err(RosterError::parse(
                            self.line_no,
                            format!("unsupported escape `\\{}`", other),
                        ));
                    }
                    None => break,
                },
                _ => out.push(ch),
            }
        }
        Err(RosterError::parse(self.line_no, "unterminated string literal"))
    }

    fn take_opt_quoted(&mut self) -> Result<Option<String>> {
        if self.try_eat("null") {
            Ok(None)
        } else {
            self.take_quoted().map(Some)
        }
    }

    fn finish(&mut self) -> Result<()> {
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(RosterError::parse(
                self.line_no,
                format!("trailing characters `{}`", self.snippet()),
            ))
        }
    }
}
