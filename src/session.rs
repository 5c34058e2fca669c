//! Interactive quiz loop over any line reader and writer.
//!
//! The binary wires this to stdin/stdout; tests drive it with byte buffers.

use crate::config::{OutputFormat, QuizConfig};
use crate::error::QuizError;
use crate::models::{Grade, ProblemInstance, QuestionKind};
use crate::output::{
    csv_header, grade_line, problem_banner, problem_json, reveal_line, round_row, subnet_details,
    RoundSummary,
};
use crate::processing::{DrillDirection, OctetDrill};
use colored::Colorize;
use std::error::Error;
use std::io::{self, BufRead, Lines, Write};

/// Short hint for an answer that could not be read.
pub fn input_hint(e: &QuizError) -> &'static str {
    match e {
        QuizError::NotANumber(_) => "please enter a number",
        QuizError::InvalidMask(_) => "that is not a valid mask",
        QuizError::MalformedAddress(_) => "please enter four octets like 255.255.255.0",
        QuizError::MalformedBinary(_) => "please enter up to eight binary digits",
        _ => "answer not understood",
    }
}

pub struct Session<'a, R, W> {
    config: &'a QuizConfig,
    input: Lines<R>,
    out: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a QuizConfig, input: R, out: W) -> Self {
        Session {
            config,
            input: input.lines(),
            out,
        }
    }

    /// Print `text` and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.input.next().transpose()
    }

    /// Ask one question until it is right or the attempts run out. The
    /// canonical answer is only shown once every attempt is used. Unreadable
    /// answers re-prompt without using an attempt. `None` on end of input.
    pub fn ask(
        &mut self,
        problem: &ProblemInstance,
        kind: QuestionKind,
    ) -> Result<Option<Grade>, Box<dyn Error>> {
        let mut attempt = 0;
        loop {
            let Some(candidate) = self.prompt(&format!("{kind}: "))? else {
                return Ok(None);
            };
            let g = match crate::grade(problem, kind, &candidate) {
                Ok(g) => g,
                Err(e) if e.is_input_error() => {
                    writeln!(self.out, "{} ({e})", input_hint(&e).yellow())?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            attempt += 1;
            writeln!(self.out, "{}", grade_line(&g))?;
            if g.correct {
                return Ok(Some(g));
            }
            if attempt >= self.config.attempts {
                writeln!(self.out, "{}", reveal_line(&g.canonical))?;
                return Ok(Some(g));
            }
            writeln!(self.out, "please try again")?;
        }
    }

    /// One full round: every question of the problem's mode, then the
    /// network facts and a CSV summary row. `false` if input ended early.
    pub fn run_round(&mut self, problem: &ProblemInstance) -> Result<bool, Box<dyn Error>> {
        if self.config.output == OutputFormat::Json {
            writeln!(self.out, "{}", problem_json(problem)?)?;
        }
        writeln!(self.out, "{}", problem_banner(problem))?;

        let mut grades = Vec::new();
        for kind in problem.questions() {
            match self.ask(problem, *kind)? {
                Some(g) => grades.push(g),
                None => return Ok(false),
            }
        }

        writeln!(self.out, "{}", subnet_details(problem, self.config.map_style))?;
        let summary = RoundSummary {
            problem,
            grades: &grades,
            finished_at: chrono::Utc::now(),
        };
        log::info!("round {} score {}/{}", problem.cidr, summary.score(), grades.len());
        writeln!(self.out, "{}", csv_header())?;
        writeln!(self.out, "{}", round_row(&summary))?;
        Ok(true)
    }

    /// One octet conversion. `false` if input ended early.
    pub fn run_drill(&mut self, drill: OctetDrill) -> Result<bool, Box<dyn Error>> {
        let question = match drill.direction {
            DrillDirection::DecimalToBinary => format!("Convert {} to binary: ", drill.shown()),
            DrillDirection::BinaryToDecimal => format!("Convert {} to decimal: ", drill.shown()),
        };
        let mut wrong_guesses = Vec::new();
        while (wrong_guesses.len() as u32) < self.config.attempts {
            let Some(candidate) = self.prompt(&question)? else {
                return Ok(false);
            };
            match drill.grade(&candidate) {
                Ok(true) => {
                    writeln!(self.out, "{}", "correct".green())?;
                    return Ok(true);
                }
                Ok(false) => {
                    writeln!(self.out, "{}", "incorrect".red())?;
                    wrong_guesses.push(candidate.trim().to_string());
                }
                Err(e) => writeln!(self.out, "{} ({e})", input_hint(&e).yellow())?,
            }
        }
        writeln!(
            self.out,
            "{}; you tried {}",
            reveal_line(&drill.canonical()),
            wrong_guesses.join(", ")
        )?;
        Ok(true)
    }

    /// Ask whether to play another round.
    pub fn play_again(&mut self) -> io::Result<bool> {
        let choice = self.prompt("Enter 'r' for another round, anything else to quit: ")?;
        Ok(matches!(choice, Some(c) if c.trim().eq_ignore_ascii_case("r")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizMode;
    use std::net::Ipv4Addr;

    fn problem() -> ProblemInstance {
        ProblemInstance::new(QuizMode::Classful, Ipv4Addr::new(211, 17, 48, 246), 26).unwrap()
    }

    /// Run `f` against a session fed with `input`, return what it printed.
    fn transcript<T>(
        config: &QuizConfig,
        input: &str,
        f: impl FnOnce(&mut Session<&[u8], Vec<u8>>) -> T,
    ) -> (T, String) {
        colored::control::set_override(false);
        let mut session = Session::new(config, input.as_bytes(), Vec::new());
        let result = f(&mut session);
        (result, String::from_utf8(session.out).unwrap())
    }

    #[test]
    fn test_ask_first_try() {
        let config = QuizConfig::default();
        let (g, out) = transcript(&config, "C\n", |s| {
            s.ask(&problem(), QuestionKind::AddressClass).unwrap()
        });
        assert!(g.unwrap().correct);
        assert_eq!(out, "Native Address Class: C correct\n");
    }

    #[test]
    fn test_ask_hides_answer_until_attempts_used() {
        let config = QuizConfig::default();
        let (g, out) = transcript(&config, "Z\nB\nA\nC\n", |s| {
            s.ask(&problem(), QuestionKind::AddressClass).unwrap()
        });
        let g = g.unwrap();
        assert!(!g.correct);
        assert_eq!(g.normalized_candidate, "A");
        assert_eq!(
            out,
            "Native Address Class: Z incorrect\nplease try again\n\
             Native Address Class: B incorrect\nplease try again\n\
             Native Address Class: A incorrect\nThe answer was C\n"
        );
    }

    #[test]
    fn test_ask_correct_after_wrong_never_reveals() {
        let config = QuizConfig::default();
        let (g, out) = transcript(&config, "Z\nC\n", |s| {
            s.ask(&problem(), QuestionKind::AddressClass).unwrap()
        });
        assert!(g.unwrap().correct);
        assert!(!out.contains("answer was"));
        assert!(out.ends_with("Native Address Class: C correct\n"));
    }

    #[test]
    fn test_ask_unreadable_answer_keeps_attempt() {
        let config = QuizConfig {
            attempts: 1,
            ..QuizConfig::default()
        };
        let (g, out) = transcript(&config, "six\n/x\n6\n", |s| {
            s.ask(&problem(), QuestionKind::HostBitCount).unwrap()
        });
        assert!(g.unwrap().correct);
        assert_eq!(out.matches("please enter a number").count(), 2);
        assert!(out.ends_with("Host Bits: 6 correct\n"), "{out}");
    }

    #[test]
    fn test_ask_end_of_input() {
        let config = QuizConfig::default();
        let (g, _) = transcript(&config, "Z\n", |s| {
            s.ask(&problem(), QuestionKind::AddressClass).unwrap()
        });
        assert!(g.is_none());
    }

    #[test]
    fn test_run_round_scores() {
        let config = QuizConfig {
            attempts: 1,
            ..QuizConfig::default()
        };
        let input = "C\n110\nN.N.N.H\n255.255.255.0\n0.0.0.63\n";
        let (finished, out) = transcript(&config, input, |s| s.run_round(&problem()).unwrap());
        assert!(finished);
        assert!(out.starts_with("Given the IP address 211.17.48.246/26, answer the following:\n"));
        assert!(out.contains("255.255.255.0 incorrect\nThe answer was 255.255.255.192\n"));
        assert!(out.contains("network 211.17.48.192/26, broadcast 211.17.48.255"));
        assert!(out.trim_end().ends_with("\"4/5\""), "{out}");
    }

    #[test]
    fn test_run_round_stops_at_end_of_input() {
        let config = QuizConfig::default();
        let (finished, out) = transcript(&config, "C\n", |s| s.run_round(&problem()).unwrap());
        assert!(!finished);
        assert!(!out.contains("network"));
    }

    #[test]
    fn test_run_drill_tracks_wrong_guesses() {
        let config = QuizConfig {
            attempts: 2,
            ..QuizConfig::default()
        };
        let drill = OctetDrill {
            value: 192,
            direction: DrillDirection::DecimalToBinary,
        };
        let (finished, out) = transcript(&config, "1100\n12\n11000001\n", |s| {
            s.run_drill(drill).unwrap()
        });
        assert!(finished);
        assert_eq!(out.matches("incorrect").count(), 2);
        assert!(out.contains("please enter up to eight binary digits"));
        assert!(out.ends_with("The answer was 11000000; you tried 1100, 11000001\n"));
    }

    #[test]
    fn test_run_drill_correct() {
        let config = QuizConfig::default();
        let drill = OctetDrill {
            value: 5,
            direction: DrillDirection::BinaryToDecimal,
        };
        let (finished, out) = transcript(&config, " 5 \n", |s| s.run_drill(drill).unwrap());
        assert!(finished);
        assert_eq!(out, "Convert 00000101 to decimal: correct\n");
    }

    #[test]
    fn test_play_again() {
        let config = QuizConfig::default();
        assert!(transcript(&config, "R\n", |s| s.play_again().unwrap()).0);
        assert!(!transcript(&config, "q\n", |s| s.play_again().unwrap()).0);
        assert!(!transcript(&config, "", |s| s.play_again().unwrap()).0);
    }
}
