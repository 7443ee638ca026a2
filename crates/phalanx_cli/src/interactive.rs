//! Interactive console mode.
//!
//! Prompts for a soldier count per unit class for both sides, runs the
//! search, and prints either the winning arrangement or a no-chance
//! message. IO is injected so tests can drive a whole session from a
//! buffer.

use std::io::{self, BufRead, Write};

use phalanx_core::army::Army;
use phalanx_core::battle::{BattleSimulator, SearchOutcome};
use phalanx_core::class::UnitClass;
use phalanx_core::platoon::Platoon;

/// A single prompt-driven battle session.
///
/// The class list prompted for is the first `arity` entries of
/// [`UnitClass::ALL`], one platoon per class per side.
pub struct InteractiveSession<R, W> {
    reader: R,
    writer: W,
    arity: usize,
}

impl InteractiveSession<io::StdinLock<'static>, io::Stdout> {
    /// Create a session wired to the process stdin and stdout.
    pub fn stdio(arity: usize) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), arity)
    }
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    /// Create a session reading answers from `reader` and writing prompts
    /// and the verdict to `writer`.
    pub fn new(reader: R, writer: W, arity: usize) -> Self {
        Self {
            reader,
            writer,
            arity,
        }
    }

    /// Run one full session: prompt for both armies, search, report.
    ///
    /// Returns `None` when no search could run; the reason has already
    /// been written to the session's output by then.
    ///
    /// # Errors
    ///
    /// Propagates IO failures from the injected reader or writer.
    pub fn run(mut self) -> io::Result<Option<SearchOutcome>> {
        if self.arity == 0 || self.arity > UnitClass::COUNT {
            writeln!(
                self.writer,
                "Interactive battles field 1 to {} platoons per side, not {}.",
                UnitClass::COUNT,
                self.arity
            )?;
            return Ok(None);
        }

        writeln!(self.writer, "Attacking army:")?;
        let attacker = self.prompt_army()?;
        writeln!(self.writer, "Defending army:")?;
        let defender = self.prompt_army()?;

        let battle = BattleSimulator::new(attacker, defender, self.arity);
        match battle.find_winning_arrangement() {
            Ok(outcome) => {
                writeln!(self.writer)?;
                match outcome.arrangement() {
                    Some(arrangement) => {
                        writeln!(self.writer, "Winning arrangement: {}", arrangement.ordering)?;
                        writeln!(self.writer, "Defending order: {}", battle.defender())?;
                        writeln!(
                            self.writer,
                            "Wins {} of {} pairings (needed {}).",
                            arrangement.wins,
                            self.arity,
                            battle.threshold()
                        )?;
                    }
                    None => {
                        writeln!(
                            self.writer,
                            "No chance of winning: examined all {} orderings, none wins enough pairings.",
                            outcome.stats.orderings_examined
                        )?;
                    }
                }
                Ok(Some(outcome))
            }
            Err(err) => {
                writeln!(self.writer, "{}", err)?;
                Ok(None)
            }
        }
    }

    /// Prompt for one army, one count per prompted class.
    ///
    /// Blank, non-numeric, and out-of-range answers become 0; end of
    /// input counts as a blank answer.
    fn prompt_army(&mut self) -> io::Result<Army> {
        let mut platoons = Vec::with_capacity(self.arity);
        for &class in UnitClass::ALL.iter().take(self.arity) {
            write!(self.writer, "  {}: ", class.name())?;
            self.writer.flush()?;

            let mut line = String::new();
            self.reader.read_line(&mut line)?;
            platoons.push(Platoon::new(class, line.trim().parse().unwrap_or(0)));
        }
        Ok(Army::new(platoons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str, arity: usize) -> (Option<SearchOutcome>, String) {
        let mut output = Vec::new();
        let session = InteractiveSession::new(Cursor::new(input.to_string()), &mut output, arity);
        let outcome = session.run().unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_winnable_session() {
        // Two platoons per side: Militia then Spearmen. The attacker as
        // entered takes the militia pairing, enough for a 2-line majority.
        let (outcome, output) = run_session("30\n10\n5\n40\n", 2);

        let outcome = outcome.expect("session ran a search");
        assert!(outcome.is_found());
        assert!(output.contains("  Militia: "));
        assert!(output.contains("  Spearmen: "));
        assert!(output.contains("Winning arrangement: Militia#30;Spearmen#10"));
        assert!(output.contains("Wins 1 of 2 pairings (needed 1)."));
    }

    #[test]
    fn test_hopeless_session() {
        let (outcome, output) = run_session("1\n1\n1000\n1000\n", 2);

        let outcome = outcome.expect("session ran a search");
        assert!(!outcome.is_found());
        assert_eq!(outcome.stats.orderings_examined, 2);
        assert!(output.contains("No chance of winning"));
    }

    #[test]
    fn test_junk_and_missing_counts_become_zero() {
        // "abc" and end-of-input both turn into zero-man platoons, so the
        // single pairing draws and the search exhausts.
        let (outcome, _) = run_session("abc\n", 1);

        let outcome = outcome.expect("session ran a search");
        assert!(!outcome.is_found());
        assert_eq!(outcome.stats.orderings_examined, 1);
    }

    #[test]
    fn test_arity_beyond_class_list_is_refused() {
        let (outcome, output) = run_session("", 7);
        assert!(outcome.is_none());
        assert!(output.contains("1 to 6"));

        let (outcome, _) = run_session("", 0);
        assert!(outcome.is_none());
    }
}
