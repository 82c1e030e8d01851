use std::io::{BufRead, Write};

use crate::parcheesi::{Board, Error, FaceSource, Player, Throwing};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Hard cap on the number of rounds; there is no other way for a game to end.
    pub max_rounds: u32,
    /// Skip the "press enter" prompt between turns.
    pub auto_continue: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_rounds: 10,
            auto_continue: false,
        }
    }
}

/// What happened during one player's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: usize,
    pub throwing: Throwing,
    /// Numbers of the pieces that left jail.
    pub released: Vec<u8>,
}

pub struct Game {
    board: Board,
    players: Vec<Player>,
    round: u32,
    config: GameConfig,
}

impl Game {
    pub fn new(mut board: Board, players: Vec<Player>, config: GameConfig) -> Self {
        for player in &players {
            board.update(player.pieces());
        }
        Game {
            board,
            players,
            round: 0,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Pieces a double may release from jail: two for double ones or double sixes, otherwise one.
    pub fn release_count(face: u8) -> usize {
        match face {
            1 | 6 => 2,
            _ => 1,
        }
    }

    /// Rolls for the player at `index` and releases jailed pieces on a double.
    /// The dice never move pieces that are already in play.
    pub fn take_turn(&mut self, index: usize, faces: &mut impl FaceSource) -> Result<TurnReport, Error> {
        let player = self
            .players
            .get_mut(index)
            .ok_or(Error::InvalidPlayer { index })?;
        let throwing = player.throwing(faces);

        let mut released = Vec::new();
        if let Some(face) = throwing.double_face() {
            let jailed = player.pieces_in_jail();
            for &number in jailed.iter().take(Self::release_count(face)) {
                player.activate_piece(number)?;
                released.push(number);
            }
        }
        self.board.update(player.pieces());

        tracing::info!(
            player = player.name(),
            faces = ?throwing.dice().iter().map(|d| d.face()).collect::<Vec<_>>(),
            released = ?released,
            "turn played"
        );

        Ok(TurnReport { player: index, throwing, released })
    }

    /// Plays until the round cap, writing the board and every throw to `out`.
    /// Between turns it waits for a line on `input` unless auto-continue is set;
    /// a closed input ends the game early.
    pub fn run(
        &mut self,
        faces: &mut impl FaceSource,
        out: &mut impl Write,
        input: &mut impl BufRead,
    ) -> anyhow::Result<()> {
        writeln!(out, "{}", self.board)?;

        while self.round < self.config.max_rounds {
            self.round += 1;
            tracing::debug!(round = self.round, "round started");

            for index in 0..self.players.len() {
                let report = self.take_turn(index, faces)?;
                let player = &self.players[index];

                writeln!(out, "Round {} - {} ({}) rolled:", self.round, player.name(), player.color())?;
                write!(out, "{}", report.throwing)?;
                if !report.released.is_empty() {
                    let names: Vec<String> = report
                        .released
                        .iter()
                        .map(|number| format!("{}{}", player.color(), number))
                        .collect();
                    writeln!(out, "Doubles! Out of jail: {}", names.join(", "))?;
                }
                writeln!(out, "{}", self.board)?;

                if !self.config.auto_continue {
                    write!(out, "Press enter to continue...")?;
                    out.flush()?;
                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        tracing::info!(round = self.round, "input closed, leaving the game");
                        return Ok(());
                    }
                }
            }
        }

        tracing::info!(rounds = self.round, "round limit reached");
        Ok(())
    }
}
