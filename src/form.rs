//! Interactive customer-profile form on a line-oriented terminal.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::profile::{CustomerProfile, MAX_AGE, MIN_AGE, MIN_CAMPAIGN, flag_label, parse_flag};

const EXIT: &str = "exit";

/// Prompts for each profile field, re-asking on invalid answers.
///
/// Returns `Ok(None)` when the user types `exit` or input ends.
pub fn prompt_profile<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<CustomerProfile>> {
    let defaults = CustomerProfile::default();

    let Some(age) = ask_number(input, output, "Customer Age", defaults.age, |v| {
        (MIN_AGE..=MAX_AGE).contains(v)
    })?
    else {
        return Ok(None);
    };
    let Some(balance) = ask_number(input, output, "Account Balance", defaults.balance, |v: &f64| {
        v.is_finite()
    })?
    else {
        return Ok(None);
    };
    let Some(housing) = ask_flag(input, output, "Housing Loan", defaults.housing)? else {
        return Ok(None);
    };
    let Some(loan) = ask_flag(input, output, "Personal Loan", defaults.loan)? else {
        return Ok(None);
    };
    let Some(campaign) = ask_number(input, output, "Campaign Contacts", defaults.campaign, |v| {
        *v >= MIN_CAMPAIGN
    })?
    else {
        return Ok(None);
    };
    let Some(previous) = ask_number(input, output, "Previous Contacts", defaults.previous, |_| true)?
    else {
        return Ok(None);
    };

    Ok(Some(CustomerProfile {
        age,
        balance,
        housing,
        loan,
        campaign,
        previous,
    }))
}

/// Reads one trimmed answer. `None` means exit or end of input.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label} [{default}]: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim();
    if answer.eq_ignore_ascii_case(EXIT) {
        return Ok(None);
    }
    Ok(Some(answer.to_string()))
}

fn ask_number<T, R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: T,
    accept: impl Fn(&T) -> bool,
) -> io::Result<Option<T>>
where
    T: FromStr + Display + Copy,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = read_answer(input, output, label, &default.to_string())? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(default));
        }
        match answer.parse::<T>() {
            Ok(value) if accept(&value) => return Ok(Some(value)),
            _ => writeln!(output, "  {answer:?} is not a valid {}", label.to_lowercase())?,
        }
    }
}

fn ask_flag<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: bool,
) -> io::Result<Option<bool>> {
    loop {
        let Some(answer) = read_answer(input, output, label, flag_label(default))? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(default));
        }
        match parse_flag(&answer) {
            Ok(flag) => return Ok(Some(flag)),
            Err(err) => writeln!(output, "  {err}")?,
        }
    }
}
