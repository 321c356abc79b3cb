//! The interactive menu as an explicit state machine.
//!
//! Each state draws its screen, reads one line and picks the next state.
//! Invalid input keeps the current state and shows a message on the redraw.
//! End of input is treated like choosing to quit.

use crate::constants::menu;
use crate::error::AppError;
use crate::stats;
use crate::teams::TeamRegistry;
use crate::ui::render;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    TeamList,
    /// Showing the report for the team at this registry position
    TeamDetail(usize),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    ListTeams,
    Quit,
}

/// Maps main menu input to a choice; `a`/`A` lists teams, `b`/`B` quits.
pub fn parse_main_choice(input: &str) -> Option<MainChoice> {
    match input.trim().to_ascii_lowercase().as_str() {
        "a" => Some(MainChoice::ListTeams),
        "b" => Some(MainChoice::Quit),
        _ => None,
    }
}

/// Maps a single letter to a team position, if it is in range.
pub fn parse_team_letter(input: &str, team_count: usize) -> Option<usize> {
    let mut chars = input.trim().chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let index = (letter.to_ascii_lowercase() as u8 - b'a') as usize;
    (index < team_count).then_some(index)
}

#[derive(Debug, Clone, Copy)]
pub struct MenuOptions {
    /// Clear the terminal before drawing the main menu and the farewell
    pub clear_screen: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// Drives the menu over any line-based input and any output.
pub struct MenuLoop<'a, R, W> {
    registry: &'a TeamRegistry,
    input: R,
    output: W,
    options: MenuOptions,
    state: MenuState,
    message: Option<String>,
}

impl<'a, R: BufRead, W: Write> MenuLoop<'a, R, W> {
    pub fn new(registry: &'a TeamRegistry, input: R, output: W, options: MenuOptions) -> Self {
        Self {
            registry,
            input,
            output,
            options,
            state: MenuState::Main,
            message: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        while self.state != MenuState::Exit {
            self.step()?;
        }
        self.clear()?;
        write!(self.output, "{}", render::farewell_screen())?;
        self.output.flush()?;
        tracing::info!("Menu closed");
        Ok(())
    }

    /// Draws the current state, reads one line and moves to the next state.
    pub fn step(&mut self) -> Result<(), AppError> {
        let next = match self.state {
            MenuState::Main => self.main_menu()?,
            MenuState::TeamList => self.team_list()?,
            MenuState::TeamDetail(index) => self.team_detail(index)?,
            MenuState::Exit => MenuState::Exit,
        };
        if next != self.state {
            tracing::debug!("Menu state {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        Ok(())
    }

    fn main_menu(&mut self) -> Result<MenuState, AppError> {
        self.clear()?;
        let screen = render::main_screen(self.message.take().as_deref());
        write!(self.output, "{screen}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(MenuState::Exit);
        };
        Ok(match parse_main_choice(&line) {
            Some(MainChoice::ListTeams) => MenuState::TeamList,
            Some(MainChoice::Quit) => MenuState::Exit,
            None => {
                tracing::debug!("Invalid main menu input: {line:?}");
                self.message = Some(render::invalid_input_message(&line));
                MenuState::Main
            }
        })
    }

    fn team_list(&mut self) -> Result<MenuState, AppError> {
        let names = self.registry.names();
        let screen = render::team_list_screen(names.as_slice(), self.message.take().as_deref());
        write!(self.output, "{screen}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(MenuState::Exit);
        };
        Ok(match parse_team_letter(&line, self.registry.len()) {
            Some(index) => MenuState::TeamDetail(index),
            None => {
                tracing::debug!("Invalid team selection: {line:?}");
                self.message = Some(render::invalid_input_message(&line));
                MenuState::TeamList
            }
        })
    }

    fn team_detail(&mut self, index: usize) -> Result<MenuState, AppError> {
        if let Some(team) = self.registry.get(index) {
            tracing::info!("Showing stats for team {}", team.name);
            write!(self.output, "\n{}", stats::team_report(team))?;
        }
        write!(self.output, "\n{}", menu::CONTINUE_PROMPT)?;
        self.output.flush()?;

        Ok(match self.read_line()? {
            Some(_) => MenuState::Main,
            None => MenuState::Exit,
        })
    }

    /// Reads one line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn clear(&mut self) -> Result<(), AppError> {
        if self.options.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Runs the menu against the given registry until the user quits.
pub fn run_menu<R: BufRead, W: Write>(
    registry: &TeamRegistry,
    input: R,
    output: W,
    options: MenuOptions,
) -> Result<(), AppError> {
    MenuLoop::new(registry, input, output, options).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::balance_teams;
    use crate::testing_utils::TestDataBuilder;
    use std::io::Cursor;

    const NO_CLEAR: MenuOptions = MenuOptions {
        clear_screen: false,
    };

    fn fixture_registry() -> TeamRegistry {
        balance_teams(
            &TestDataBuilder::fixture_team_names(),
            &TestDataBuilder::fixture_players(),
        )
        .unwrap()
    }

    fn run_script(registry: &TeamRegistry, script: &str) -> String {
        let mut output = Vec::new();
        run_menu(registry, Cursor::new(script.as_bytes()), &mut output, NO_CLEAR).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_main_choice() {
        assert_eq!(parse_main_choice("a"), Some(MainChoice::ListTeams));
        assert_eq!(parse_main_choice("A"), Some(MainChoice::ListTeams));
        assert_eq!(parse_main_choice("b"), Some(MainChoice::Quit));
        assert_eq!(parse_main_choice("B "), Some(MainChoice::Quit));
        assert_eq!(parse_main_choice("c"), None);
        assert_eq!(parse_main_choice(""), None);
        assert_eq!(parse_main_choice("ab"), None);
    }

    #[test]
    fn test_parse_team_letter() {
        assert_eq!(parse_team_letter("a", 4), Some(0));
        assert_eq!(parse_team_letter("D", 4), Some(3));
        assert_eq!(parse_team_letter("e", 4), None);
        assert_eq!(parse_team_letter("1", 4), None);
        assert_eq!(parse_team_letter("ab", 4), None);
        assert_eq!(parse_team_letter("", 4), None);
        assert_eq!(parse_team_letter("a", 0), None);
        assert_eq!(parse_team_letter("é", 4), None);
    }

    #[test]
    fn test_quit_immediately() {
        let registry = fixture_registry();
        let output = run_script(&registry, "b\n");
        assert!(output.starts_with(menu::TITLE));
        assert!(output.ends_with(&render::farewell_screen()));
    }

    #[test]
    fn test_invalid_main_input_reprompts() {
        let registry = fixture_registry();
        let output = run_script(&registry, "x\nb\n");
        assert_eq!(output.matches(menu::TITLE).count(), 2);
        assert!(output.contains("'x' is invalid. Enter a menu option."));
    }

    #[test]
    fn test_view_team_detail() {
        let registry = fixture_registry();
        // List teams, pick C (team "A"), acknowledge, quit
        let output = run_script(&registry, "a\nc\n\nb\n");

        assert!(output.contains(" A) C\n B) D\n C) A\n D) B\n"));
        assert!(output.contains("Team: A Stats"));
        assert!(output.contains("Bill Bon, Sammy Adams"));
        assert!(output.contains(menu::CONTINUE_PROMPT));
        assert_eq!(output.matches(menu::TITLE).count(), 2);
    }

    #[test]
    fn test_invalid_team_letter_reprompts_team_list() {
        let registry = fixture_registry();
        let output = run_script(&registry, "a\nz\nb\n\nb\n");

        assert!(output.contains("'z' is invalid. Enter a menu option."));
        assert_eq!(output.matches(" A) C\n").count(), 2);
        assert!(output.contains("Team: D Stats"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let registry = fixture_registry();
        let output = run_script(&registry, "a\n");
        assert!(output.ends_with(&render::farewell_screen()));
    }

    #[test]
    fn test_step_transitions() {
        let registry = fixture_registry();
        let mut output = Vec::new();
        let mut menu_loop = MenuLoop::new(
            &registry,
            Cursor::new("a\nb\n\n".as_bytes()),
            &mut output,
            NO_CLEAR,
        );

        assert_eq!(menu_loop.state(), MenuState::Main);
        menu_loop.step().unwrap();
        assert_eq!(menu_loop.state(), MenuState::TeamList);
        menu_loop.step().unwrap();
        assert_eq!(menu_loop.state(), MenuState::TeamDetail(1));
        menu_loop.step().unwrap();
        assert_eq!(menu_loop.state(), MenuState::Main);
    }

    #[test]
    fn test_empty_registry_team_list() {
        let registry = TeamRegistry::default();
        let output = run_script(&registry, "a\na\n");
        assert!(output.contains("'a' is invalid. Enter a menu option."));
    }

    #[test]
    fn test_clear_screen_emits_escape_codes() {
        let registry = fixture_registry();
        let mut output = Vec::new();
        run_menu(
            &registry,
            Cursor::new("b\n".as_bytes()),
            &mut output,
            MenuOptions::default(),
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with('\u{1b}'));
    }
}
