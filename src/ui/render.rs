//! Text for the menu screens.

use crate::constants::menu;

/// Lists options as ` A) first`, ` B) second`, ... preceded by a blank line.
pub fn format_options<S: AsRef<str>>(options: &[S]) -> String {
    let mut out = String::from("\n");
    for (letter, option) in menu::OPTION_LETTERS.chars().zip(options) {
        out.push_str(&format!(" {letter}) {}\n", option.as_ref()));
    }
    out
}

/// Message shown under the options after unrecognized input.
pub fn invalid_input_message(input: &str) -> String {
    format!("\n'{input}' is invalid. Enter a menu option.")
}

/// Blank line when there is no message, otherwise the message itself.
fn message_line(message: Option<&str>) -> String {
    format!("{}\n", message.unwrap_or_default())
}

pub fn main_screen(message: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(menu::TITLE);
    out.push_str("\n\n");
    out.push_str(menu::HEADING);
    out.push_str("\n\n");
    out.push_str(menu::CHOICES);
    out.push('\n');
    out.push_str(&format_options(&[menu::LIST_TEAMS, menu::QUIT]));
    out.push_str(&message_line(message));
    out.push_str(menu::PROMPT);
    out
}

pub fn team_list_screen<S: AsRef<str>>(team_names: &[S], message: Option<&str>) -> String {
    let mut out = format_options(team_names);
    out.push_str(&message_line(message));
    out.push_str(menu::PROMPT);
    out
}

pub fn farewell_screen() -> String {
    format!("\n{}\n\n", menu::FAREWELL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options() {
        assert_eq!(
            format_options(&["Panthers", "Bandits"]),
            "\n A) Panthers\n B) Bandits\n"
        );
    }

    #[test]
    fn test_format_options_stops_at_z() {
        let names: Vec<String> = (0..30).map(|i| format!("Team {i}")).collect();
        let text = format_options(&names);
        assert!(text.contains(" Z) Team 25"));
        assert!(!text.contains("Team 26"));
    }

    #[test]
    fn test_main_screen_without_message() {
        let expected = "BASKETBALL TEAM STATS TOOL\n\
                        \n\
                        ---- MENU----\n\
                        \n\
                        Here are your choices:\n\
                        \n \
                        A) List all teams\n \
                        B) Quit the program\n\
                        \n\
                        Enter an option: ";
        assert_eq!(main_screen(None), expected);
    }

    #[test]
    fn test_main_screen_with_message() {
        let screen = main_screen(Some(&invalid_input_message("x")));
        assert!(screen.ends_with("\n'x' is invalid. Enter a menu option.\nEnter an option: "));
    }

    #[test]
    fn test_team_list_screen() {
        assert_eq!(
            team_list_screen(&["C", "D"], None),
            "\n A) C\n B) D\n\nEnter an option: "
        );
    }

    #[test]
    fn test_farewell() {
        assert!(farewell_screen().contains("Bye :)"));
    }
}
