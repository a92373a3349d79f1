use std::{
    io::{self, Write},
    ops::ControlFlow,
    thread::sleep,
    time::Instant,
};

use bounce::{
    controller::Host,
    geometry::{Rect, Transition},
    palette::ImageId,
    sprite::BouncingSprite,
    VIEW_SIZE,
};
use log::{debug, warn};
use termion::{
    clear,
    color::{self, Bg, Fg, Rgb},
    cursor::Goto,
    event::Key,
};

use crate::Quit;

const LABEL: &str = "DVD";

/// A rect on the terminal grid, zero based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cells {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

/// Scales a rect in view coordinates onto a `cols` x `rows` terminal, keeping
/// it fully on screen.
pub fn project(rect: Rect, (cols, rows): (u16, u16)) -> Cells {
    let scale_x = cols as f64 / VIEW_SIZE.width;
    let scale_y = rows as f64 / VIEW_SIZE.height;
    let width = ((rect.size.width * scale_x).round() as u16).clamp(1, cols.max(1));
    let height = ((rect.size.height * scale_y).round() as u16).clamp(1, rows.max(1));
    let col = (rect.origin.x * scale_x).floor().max(0.0) as u16;
    let row = (rect.origin.y * scale_y).floor().max(0.0) as u16;
    Cells {
        col: col.min(cols.saturating_sub(width)),
        row: row.min(rows.saturating_sub(height)),
        width,
        height,
    }
}

/// The bitmap stand-in for each logo colour.
pub fn resolve(image: ImageId) -> Rgb {
    match image {
        ImageId::Blue => Rgb(0, 120, 255),
        ImageId::Green => Rgb(0, 200, 80),
        ImageId::Pink => Rgb(255, 105, 180),
        ImageId::Red => Rgb(230, 30, 40),
        ImageId::Yellow => Rgb(250, 220, 0),
    }
}

/// Draws the logo on a black terminal and paces the animation with
/// `thread::sleep`. Keys are polled between frames.
pub struct TerminalHost<W, K> {
    out: W,
    keys: K,
    terminal_size: fn() -> io::Result<(u16, u16)>,
    size: Option<(u16, u16)>,
    drawn: Option<(Cells, ImageId)>,
    quit: Option<Quit>,
}

impl<W, K> TerminalHost<W, K>
where
    W: Write,
    K: Iterator<Item = io::Result<Key>>,
{
    pub fn new(out: W, keys: K, terminal_size: fn() -> io::Result<(u16, u16)>) -> Self {
        Self {
            out,
            keys,
            terminal_size,
            size: None,
            drawn: None,
            quit: None,
        }
    }

    /// Why the host stopped the animation.
    pub fn into_quit(self) -> Quit {
        self.quit.unwrap_or(Quit::KeyPressed)
    }

    fn frame(&mut self, image: ImageId, transition: &Transition) -> io::Result<ControlFlow<()>> {
        let started = Instant::now();
        loop {
            if self.quit_requested()? {
                return Ok(ControlFlow::Break(()));
            }
            let elapsed = started.elapsed();
            self.draw(image, transition.at(elapsed))?;
            if elapsed >= transition.duration {
                return Ok(ControlFlow::Continue(()));
            }
            sleep(transition.duration - elapsed);
        }
    }

    fn quit_requested(&mut self) -> io::Result<bool> {
        for key in self.keys.by_ref() {
            match key? {
                Key::Char('q') | Key::Esc | Key::Ctrl('c') => {
                    self.quit = Some(Quit::KeyPressed);
                    return Ok(true);
                }
                _ => {}
            }
        }
        Ok(false)
    }

    fn draw(&mut self, image: ImageId, rect: Rect) -> io::Result<()> {
        let size = (self.terminal_size)()?;
        if self.size != Some(size) {
            debug!("terminal is {}x{}", size.0, size.1);
            write!(self.out, "{}{}", Bg(color::Black), clear::All)?;
            self.size = Some(size);
            self.drawn = None;
        }
        let cells = project(rect, size);
        if self.drawn == Some((cells, image)) {
            return Ok(());
        }
        if let Some((old, _)) = self.drawn {
            self.paint(old, Bg(color::Black), "")?;
        }
        self.paint(cells, Bg(resolve(image)), LABEL)?;
        self.drawn = Some((cells, image));
        self.out.flush()
    }

    /// Fills `cells` with `bg` and centres `label` in them, cut to fit.
    fn paint<C: color::Color>(&mut self, cells: Cells, bg: Bg<C>, label: &str) -> io::Result<()> {
        let blank = " ".repeat(cells.width as usize);
        let label = &label[..label.len().min(cells.width as usize)];
        let label_row = cells.height / 2;
        for row in 0..cells.height {
            write!(
                self.out,
                "{}{}",
                Goto(cells.col + 1, cells.row + row + 1),
                bg
            )?;
            if row == label_row && !label.is_empty() {
                let pad = (cells.width as usize - label.len()) / 2;
                write!(
                    self.out,
                    "{}{}{}{}{}",
                    &blank[..pad],
                    Fg(color::Black),
                    label,
                    Fg(color::Reset),
                    &blank[pad + label.len()..]
                )?;
            } else {
                write!(self.out, "{blank}")?;
            }
        }
        write!(self.out, "{}", Bg(color::Black))
    }
}

impl<W, K> Host for TerminalHost<W, K>
where
    W: Write,
    K: Iterator<Item = io::Result<Key>>,
{
    fn animate(&mut self, sprite: &BouncingSprite, transition: &Transition) -> ControlFlow<()> {
        match self.frame(sprite.motion().image(), transition) {
            Ok(flow) => flow,
            Err(err) => {
                warn!("terminal error: {err}");
                self.quit = Some(Quit::Error(err));
                ControlFlow::Break(())
            }
        }
    }
}
