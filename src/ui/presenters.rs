use crate::game_engine::GameState;
use crate::io::OutputWriter;
use crate::services::snapshot::Snapshot;

pub struct OceanPresenter;

impl OceanPresenter {
    /// Draw the grid with a column ruler on top and row numbers on the left.
    pub fn show_grid(snapshot: &Snapshot, output: &mut dyn OutputWriter) {
        let width = snapshot.grid.first().map_or(0, Vec::len);
        let ruler: String = (0..width).map(|x| format!("{:^3}", x % 10)).collect();
        output.writeln(&format!("   {}", ruler));

        for (y, row) in snapshot.grid.iter().enumerate() {
            let cells: String = row.iter().map(|cell| cell.symbol()).collect();
            output.writeln(&format!("{:>2} {}", y, cells));
        }
    }

    pub fn show_status(snapshot: &Snapshot, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "SCORE {}   LIVES {}   MOVES {}   LEVEL {} ({})",
            snapshot.score, snapshot.lives, snapshot.moves, snapshot.level, snapshot.difficulty
        ));
        output.writeln(&format!(
            "SHIP {}   ARMOR {}   PROTECTION {}",
            snapshot.ship.description, snapshot.ship.armor, snapshot.ship.protection
        ));
        if snapshot.monsters_active {
            output.writeln("SEA MONSTERS ARE STIRRING NEAR THE TREASURE");
        }
    }
}

pub struct OutcomePresenter;

impl OutcomePresenter {
    pub fn show(snapshot: &Snapshot, output: &mut dyn OutputWriter) {
        match snapshot.status {
            GameState::Win => {
                output.writeln("");
                output.writeln(&format!(
                    "*** TREASURE FOUND! LEVEL {} COMPLETE ***",
                    snapshot.level
                ));
                output.writeln(&format!("FINAL SCORE = {}", snapshot.score));
            }
            GameState::Lose => {
                output.writeln("");
                output.writeln("*** YOUR SHIP HAS BEEN SUNK ***");
                output.writeln(&format!("FINAL SCORE = {}", snapshot.score));
            }
            GameState::Playing | GameState::Paused => {}
        }
    }
}
