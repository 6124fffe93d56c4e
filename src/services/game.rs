use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::models::navigation_types::Direction;
use crate::services::session::GameSession;
use crate::ui::presenters::{OceanPresenter, OutcomePresenter};

/// Interactive terminal voyage over a single session.
pub struct Game {
    session: GameSession,
    json: bool,
}

impl Game {
    /// `json` switches the board display to one JSON snapshot per line.
    pub fn new(session: GameSession, json: bool) -> Self {
        Game { session, json }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn run(
        &mut self,
        io: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<()> {
        self.print_briefing(output);
        self.show_board(output)?;

        loop {
            let Some(input) = io.read_line("COMMAND")? else {
                break;
            };
            let command = input.trim().to_ascii_lowercase();

            match command.as_str() {
                "q" | "quit" => {
                    output.writeln("FAREWELL, ADMIRAL.");
                    break;
                }
                "status" => self.show_board(output)?,
                _ if Direction::parse(&command).is_some() => {
                    self.session.apply_move(&command);
                    self.show_board(output)?;
                }
                _ => Self::print_command_menu(output),
            }

            let snapshot = self.session.snapshot();
            if snapshot.status.is_terminal() {
                OutcomePresenter::show(&snapshot, output);
                break;
            }
        }
        Ok(())
    }

    fn show_board(&self, output: &mut dyn OutputWriter) -> GameResult<()> {
        let snapshot = self.session.snapshot();
        if self.json {
            output.writeln(&serde_json::to_string(&snapshot)?);
        } else {
            OceanPresenter::show_grid(&snapshot, output);
            OceanPresenter::show_status(&snapshot, output);
        }
        Ok(())
    }

    fn print_briefing(&self, output: &mut dyn OutputWriter) {
        let engine = self.session.engine();
        output.writeln(&format!(
            "FIND THE TREASURE WITH {} LIVES. {} PIRATES AND {} SEA MONSTERS ARE HUNTING YOU.",
            engine.lives(),
            engine.ocean().pirates().len(),
            engine.ocean().monster_count(),
        ));
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   N / UP    = SAIL NORTH");
        output.writeln("   S / DOWN  = SAIL SOUTH");
        output.writeln("   E / RIGHT = SAIL EAST");
        output.writeln("   W / LEFT  = SAIL WEST");
        output.writeln("   STATUS    = SHOW THE CHART");
        output.writeln("   Q         = ABANDON THE VOYAGE");
    }
}
