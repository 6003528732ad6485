//! Reading and writing formulas in the DIMACS CNF format.
//!
//! The format: an optional preamble of `c`-prefixed comment lines --- preserved verbatim for serialization --- a header `p cnf <atoms> <clauses>`, then clauses as whitespace-separated signed integers terminated by `0`, with positive magnitude *i* the *i*-th atom asserted true.

use std::io::{BufRead, Write};

use crate::{
    context::Context,
    misc::log::targets,
    structures::literal::Literal,
    types::err::{self, ErrorKind},
};

impl Context {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust
    /// # use stoat_sat::context::Context;
    /// # use stoat_sat::config::Config;
    /// # use stoat_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut ctx = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 2 4
    ///  1  2 0
    /// -1  2 0
    /// -1 -2 0
    ///  1 -2 0
    /// ");
    ///
    /// assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
    /// assert_eq!(ctx.solve(), Report::Unsatisfiable);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<(), ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<Literal> = Vec::default();

        let mut line_counter = 0;
        let mut clause_counter = 0;

        // Preamble: comments until the problem specification.
        'preamble: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => return Ok(()),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                Some('c') => {
                    self.comments.push(buffer.trim_end().to_string());
                    buffer.clear();
                }

                Some('p') => {
                    let mut details = buffer.split_whitespace();
                    let atom_count: usize = match details.nth(2).map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                    };
                    let clause_count: usize = match details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                    };

                    self.grow_to(atom_count);
                    log::info!(target: targets::BUILD, "Expecting {atom_count} atoms over {clause_count} clauses");
                    buffer.clear();
                    break 'preamble;
                }

                Some(_) => break 'preamble,

                None => {
                    buffer.clear();
                }
            }
        }

        // The formula: whitespace-separated literals, with `0` closing a clause.
        'formula: loop {
            match buffer.is_empty() {
                false => {} // A buffered line from the preamble loop.
                true => match reader.read_line(&mut buffer) {
                    Ok(0) => break 'formula,
                    Ok(_) => line_counter += 1,
                    Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
                },
            }

            match buffer.chars().next() {
                Some('%') => break 'formula,
                Some('c') => {
                    self.comments.push(buffer.trim_end().to_string());
                }
                _ => {
                    for token in buffer.split_whitespace() {
                        match token {
                            "0" => {
                                let clause = std::mem::take(&mut clause_buffer);
                                match self.add_clause(clause) {
                                    // A contradicting unit settles the formula; parsing continues.
                                    Err(ErrorKind::Build(err::BuildError::Unsatisfiable)) => {}
                                    Err(e) => return Err(e),
                                    Ok(()) => clause_counter += 1,
                                }
                            }
                            _ => match token.parse::<i32>() {
                                Ok(int) if int != 0 => {
                                    clause_buffer.push(Literal::from_dimacs(int))
                                }
                                _ => {
                                    return Err(ErrorKind::from(err::ParseError::Literal(
                                        line_counter,
                                    )))
                                }
                            },
                        }
                    }
                }
            }
            buffer.clear();
        }

        log::info!(target: targets::BUILD, "Read {clause_counter} clauses");
        Ok(())
    }

    /// Writes the stored formula in the DIMACS format, comments first, verbatim.
    pub fn write_dimacs(&self, mut writer: impl Write) -> std::io::Result<()> {
        for comment in &self.comments {
            writeln!(writer, "{comment}")?;
        }
        writeln!(writer, "p cnf {} {}", self.atom_count(), self.clause_db.count())?;
        for clause in self.clause_db.clauses() {
            writeln!(writer, "{} 0", clause.as_dimacs())?;
        }
        Ok(())
    }
}
