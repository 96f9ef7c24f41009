//! Text front end: menu loop, plane placement and the shot exchange.

use std::io::{self, Write};

use crate::common::{Cell, HitResult, Winner};
use crate::config::{BOARD_SIZE, PLANES_PER_SIDE};
use crate::game::GameEngine;
use crate::grid::{Grid8, Marker};
use crate::plane::Orientation;

const LINE_WIDTH: usize = 3 + 2 * BOARD_SIZE;

/// Interactive console driver around a [`GameEngine`].
pub struct Console {
    engine: GameEngine,
}

impl Console {
    pub fn new(engine: GameEngine) -> Self {
        Console { engine }
    }

    /// Run the menu loop until the player quits.
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("~ W E L C O M E   T O   P L A N E S ~\n");
        loop {
            println!("Enter: [s] to start a new game | [q] to quit");
            let choice = prompt("-> ")?;
            match choice.as_str() {
                "s" => self.play_round()?,
                "q" => break,
                _ => println!("Invalid choice!"),
            }
        }
        Ok(())
    }

    fn play_round(&mut self) -> anyhow::Result<()> {
        self.engine.reset();
        self.place_planes()?;
        println!("The computer placed its planes as well.\n");
        let mut last_round: Option<(HitResult, HitResult)> = None;
        loop {
            print_boards(
                &self.engine.player_board(),
                &self.engine.hit_board(),
                "Your planes",
                "Your shots",
            );
            match last_round {
                Some((player, computer)) => {
                    println!("{}", outcome_line("You", player));
                    println!("{}", outcome_line("The computer", computer));
                }
                None => println!("Let's start shooting!"),
            }

            let target = read_cell("\nCell to hit (e.g. A4): ")?;
            let player_result = match self.engine.player_hit(target) {
                Ok(result) => result,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            if self.engine.winner() == Some(Winner::Human) {
                self.reveal();
                println!("YOU HAVE WON!\n");
                return Ok(());
            }

            let computer_result = self.engine.computer_hit()?;
            if self.engine.winner() == Some(Winner::Computer) {
                self.reveal();
                println!("GAME OVER! You have lost.\n");
                return Ok(());
            }
            last_round = Some((player_result, computer_result));
        }
    }

    fn place_planes(&mut self) -> anyhow::Result<()> {
        println!(
            "Place {} planes. The plane spans 5 cells wing to wing and 4 cells cabin to tail.",
            PLANES_PER_SIDE
        );
        print_plane_shape();
        let mut placed = 0;
        while placed < PLANES_PER_SIDE {
            print_board(&self.engine.player_board(), "Your planes");
            let cabin = read_cell("Cabin coordinates (e.g. A4): ")?;
            let orientation = read_orientation()?;
            match self.engine.add_player_plane(cabin, orientation) {
                Ok(()) => placed += 1,
                Err(e) => println!("{}", e),
            }
        }
        print_board(&self.engine.player_board(), "Your planes");
        Ok(())
    }

    fn reveal(&self) {
        print_boards(
            &self.engine.player_board(),
            &self.engine.computer_board(),
            "Your planes",
            "The computer's planes",
        );
    }
}

fn outcome_line(who: &str, result: HitResult) -> String {
    match result {
        HitResult::Cabin => format!("{} DESTROYED a plane!", who),
        HitResult::Hit => format!("{} HIT a plane!", who),
        HitResult::Miss => format!("{} MISSED!", who),
    }
}

fn print_plane_shape() {
    println!("The cabin -> #          A plane");
    println!("         # # # # #      heading");
    println!("             #          up");
    println!("           # # #\n");
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(line.trim().to_string())
}

fn read_cell(msg: &str) -> anyhow::Result<Cell> {
    loop {
        let line = prompt(msg)?;
        match parse_cell(&line) {
            Some(cell) => return Ok(cell),
            None => println!("Invalid coordinates!"),
        }
    }
}

fn read_orientation() -> anyhow::Result<Orientation> {
    loop {
        let line = prompt("Where is the plane heading? (up/down/left/right): ")?;
        match parse_orientation(&line) {
            Some(o) => return Ok(o),
            None => println!("Invalid plane orientation!"),
        }
    }
}

/// Parse an `A4`-style coordinate: column letter, then row number.
pub fn parse_cell(input: &str) -> Option<Cell> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as i8;
    let row: i8 = chars.as_str().trim().parse().ok()?;
    if row < 1 {
        return None;
    }
    let cell = Cell::new(row - 1, col);
    cell.in_bounds().then_some(cell)
}

/// Parse an orientation word, full or single-letter.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.to_ascii_lowercase().as_str() {
        "up" | "u" => Some(Orientation::Up),
        "down" | "d" => Some(Orientation::Down),
        "left" | "l" => Some(Orientation::Left),
        "right" | "r" => Some(Orientation::Right),
        _ => None,
    }
}

fn header() -> String {
    let mut s = String::from("   ");
    for c in 0..BOARD_SIZE {
        s.push(' ');
        s.push((b'A' + c as u8) as char);
    }
    s
}

fn row_line(board: &Grid8, r: usize) -> String {
    let mut s = format!("{:2} ", r + 1);
    for c in 0..BOARD_SIZE {
        s.push(' ');
        let marker = board.get(Cell::new(r as i8, c as i8)).unwrap_or(Marker::Empty);
        s.push(marker.symbol());
    }
    s
}

/// Print one board with column letters and row numbers.
pub fn print_board(board: &Grid8, title: &str) {
    println!("{}:", title);
    println!("{}", header());
    for r in 0..BOARD_SIZE {
        println!("{}", row_line(board, r));
    }
    println!();
}

/// Print two boards side by side.
pub fn print_boards(left: &Grid8, right: &Grid8, left_title: &str, right_title: &str) {
    println!(
        "{:<w$}    {}",
        format!("{}:", left_title),
        format!("{}:", right_title),
        w = LINE_WIDTH
    );
    println!("{:<w$}    {}", header(), header(), w = LINE_WIDTH);
    for r in 0..BOARD_SIZE {
        println!(
            "{:<w$}    {}",
            row_line(left, r),
            row_line(right, r),
            w = LINE_WIDTH
        );
    }
    println!();
}
