//! Interactive filter selection and confirmation prompts
//!
//! A bounded-retry reader over stdin: each question re-asks on invalid input
//! (showing the option list), understands the `help` keyword, and gives up
//! with a [`PromptError`] once the retry budget is spent or stdin closes.
//! Invalid selections are consumed here and never reach the pipeline.

use std::io::{self, BufRead, Write};

use crate::app::models::{City, Day, FilterSelection, Month};
use crate::constants::prompt::{HELP_KEYWORD, MAX_ATTEMPTS};
use crate::errors::{PromptError, PromptResult};

const CITY_HELP: &str = "Possible values are [chicago], [new york city] or [washington].";
const MONTH_HELP: &str =
    "Possible values are [january], [february], [march], [april], [may], [june] or [all].";
const DAY_HELP: &str = "Possible values are [monday], [tuesday], [wednesday], [thursday], \
                        [friday], [saturday], [sunday] or [all].";
const YES_NO_HELP: &str = "Please enter [y]es or [n]o.";

/// Ask the user to specify a city, month and day to analyze
///
/// Asked in that order, matching the session flow. `None` month/day means no
/// narrowing.
pub fn get_filters() -> PromptResult<FilterSelection> {
    println!("Hello! Let's explore some US bikeshare data!");

    let selection = FilterSelection {
        city: ask_city()?,
        month: ask_month()?,
        day: ask_day()?,
    };

    println!("{}", "-".repeat(40));
    Ok(selection)
}

/// Ask for the city on its own
pub fn ask_city() -> PromptResult<City> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask(
        &mut input,
        "Please enter city name or [help]: ",
        CITY_HELP,
        City::from_name,
    )
}

/// Ask for the month filter on its own; `None` means "all"
pub fn ask_month() -> PromptResult<Option<Month>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask(
        &mut input,
        "Please enter month or [help]: ",
        MONTH_HELP,
        parse_month_answer,
    )
}

/// Ask for the day filter on its own; `None` means "all"
pub fn ask_day() -> PromptResult<Option<Day>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask(
        &mut input,
        "Please enter day or [help]: ",
        DAY_HELP,
        parse_day_answer,
    )
}

/// Ask a yes/no question
pub fn confirm(label: &str) -> PromptResult<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask(&mut input, label, YES_NO_HELP, parse_yes_no)
}

/// Ask until `parse` accepts the answer or the retry budget is exhausted
///
/// The `help` keyword prints the option list without spending an attempt.
fn ask<T>(
    input: &mut impl BufRead,
    label: &str,
    help: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> PromptResult<T> {
    let mut attempts = 0;
    loop {
        print!("{label}");
        io::stdout().flush()?;

        let answer = read_answer(input)?;
        if answer == HELP_KEYWORD {
            println!("{help}");
            continue;
        }
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }

        attempts += 1;
        if attempts >= MAX_ATTEMPTS {
            return Err(PromptError::AttemptsExhausted { attempts });
        }
        println!("Sorry, wrong input.\n{help}");
    }
}

/// Read one line, trimmed and lowercased; EOF is a closed prompt
fn read_answer(input: &mut impl BufRead) -> PromptResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }
    Ok(line.trim().to_lowercase())
}

fn parse_month_answer(answer: &str) -> Option<Option<Month>> {
    if answer == "all" {
        Some(None)
    } else {
        Month::from_name(answer).map(Some)
    }
}

fn parse_day_answer(answer: &str) -> Option<Option<Day>> {
    if answer == "all" {
        Some(None)
    } else {
        Day::from_name(answer).map(Some)
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_accepts_first_valid_answer() {
        let mut input = Cursor::new(b"chicago\n".to_vec());
        let city = ask(&mut input, "city: ", CITY_HELP, City::from_name).unwrap();
        assert_eq!(city, City::Chicago);
    }

    #[test]
    fn test_ask_retries_until_valid() {
        let mut input = Cursor::new(b"gotham\nmetropolis\nnew york city\n".to_vec());
        let city = ask(&mut input, "city: ", CITY_HELP, City::from_name).unwrap();
        assert_eq!(city, City::NewYorkCity);
    }

    #[test]
    fn test_ask_help_does_not_spend_an_attempt() {
        let mut input = Cursor::new(b"help\nhelp\nwashington\n".to_vec());
        let city = ask(&mut input, "city: ", CITY_HELP, City::from_name).unwrap();
        assert_eq!(city, City::Washington);
    }

    #[test]
    fn test_ask_exhausts_retry_budget() {
        let junk = "nope\n".repeat(MAX_ATTEMPTS + 1);
        let mut input = Cursor::new(junk.into_bytes());
        let err = ask(&mut input, "city: ", CITY_HELP, City::from_name).unwrap_err();
        assert!(matches!(
            err,
            PromptError::AttemptsExhausted {
                attempts: MAX_ATTEMPTS
            }
        ));
    }

    #[test]
    fn test_ask_closed_stdin() {
        let mut input = Cursor::new(Vec::new());
        let err = ask(&mut input, "city: ", CITY_HELP, City::from_name).unwrap_err();
        assert!(matches!(err, PromptError::Closed));
    }

    #[test]
    fn test_answers_are_normalized() {
        let mut input = Cursor::new(b"  New York City  \n".to_vec());
        let city = ask(&mut input, "city: ", CITY_HELP, City::from_name).unwrap();
        assert_eq!(city, City::NewYorkCity);
    }

    #[test]
    fn test_month_and_day_answers() {
        assert_eq!(parse_month_answer("all"), Some(None));
        assert_eq!(parse_month_answer("june"), Some(Some(Month::June)));
        assert_eq!(parse_month_answer("july"), None);

        assert_eq!(parse_day_answer("all"), Some(None));
        assert_eq!(parse_day_answer("monday"), Some(Some(Day::Monday)));
        assert_eq!(parse_day_answer("noday"), None);
    }

    #[test]
    fn test_yes_no_answers() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("no"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
    }
}
