// UI layer: renders the numbered repository menu and reads the user's
// selection using `dialoguer`. Input validation is a pure function so the
// loop itself stays trivial.

use crate::api::Repo;
use anyhow::Result;
use dialoguer::Input;

/// The two terminal outcomes of the menu: a 0-based index into the
/// repository list, or a request to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Chosen(usize),
    Quit,
}

/// Validate one line of menu input against a list of `len` entries.
///
/// "q"/"Q" quits; a digit string in 1..=len selects (returned 0-based);
/// anything else — empty, non-digit, "0", out of range — is rejected.
pub fn parse_choice(input: &str, len: usize) -> Option<Selection> {
    let input = input.trim();

    if input == "q" || input == "Q" {
        return Some(Selection::Quit);
    }
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(Selection::Chosen(n - 1)),
        _ => None,
    }
}

/// Print the 1-based menu and loop until the user picks a valid entry or
/// quits. Invalid entries reprint a short message and reprompt.
pub fn choose(repos: &[Repo]) -> Result<Selection> {
    println!();
    for (i, repo) in repos.iter().enumerate() {
        println!("{} - {}", i + 1, repo);
    }
    println!();

    loop {
        let line: String = Input::new()
            .with_prompt("Please choose a repo or Q to quit")
            .interact_text()?;

        match parse_choice(&line, repos.len()) {
            Some(Selection::Chosen(i)) => {
                println!();
                println!("Chosen repo {}", repos[i]);
                return Ok(Selection::Chosen(i));
            }
            Some(Selection::Quit) => return Ok(Selection::Quit),
            None => println!("You need to choose a repo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_on_q_either_case() {
        assert_eq!(parse_choice("q", 3), Some(Selection::Quit));
        assert_eq!(parse_choice("Q", 3), Some(Selection::Quit));
    }

    #[test]
    fn in_range_number_selects_zero_based() {
        assert_eq!(parse_choice("1", 3), Some(Selection::Chosen(0)));
        assert_eq!(parse_choice("3", 3), Some(Selection::Chosen(2)));
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(parse_choice("0", 3), None);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("1", 0), None);
    }

    #[test]
    fn non_digit_is_rejected() {
        assert_eq!(parse_choice("abc", 3), None);
        assert_eq!(parse_choice("1a", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
        assert_eq!(parse_choice("", 3), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_choice(" 2 ", 3), Some(Selection::Chosen(1)));
        assert_eq!(parse_choice(" q", 3), Some(Selection::Quit));
    }
}
