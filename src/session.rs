//! Interactive Add / Remove / Find loop driving an [`ActorFilmIndex`].

use crate::{
    command::{normalize_name, Command},
    errors::DriverError,
    index::ActorFilmIndex,
    snapshot::Visualizer,
};
use std::io::{BufRead, Write};
use tracing::info;

const MENU: &str = "Enter one of the following commands or Exit to quit:\n\
                    Add: add an actor/movie pair\n\
                    Remove: remove an actor\n\
                    Find: find an actor's movie list\n";

pub struct Session<'a, R, W, V> {
    index: &'a mut ActorFilmIndex,
    input: R,
    output: W,
    visualizer: V,
}

impl<'a, R: BufRead, W: Write, V: Visualizer> Session<'a, R, W, V> {
    pub fn new(index: &'a mut ActorFilmIndex, input: R, output: W, visualizer: V) -> Self {
        Self {
            index,
            input,
            output,
            visualizer,
        }
    }

    /// Publishes the loaded list once, then serves commands until `Exit` or
    /// end of input.
    pub fn run(&mut self) -> Result<(), DriverError> {
        self.visualizer.publish(&self.index.snapshot())?;
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let Some(command) = Command::parse(&line) else {
                writeln!(self.output, "Command not recognized\n")?;
                continue;
            };
            info!(?command, "session command");
            let proceed = match command {
                Command::Add => self.add()?,
                Command::Remove => self.remove()?,
                Command::Find => self.find()?,
                Command::Exit => false,
            };
            if !proceed {
                return Ok(());
            }
        }
    }

    pub fn into_visualizer(self) -> V {
        self.visualizer
    }

    fn add(&mut self) -> Result<bool, DriverError> {
        let Some(actor) = self.prompt("Enter the name of the actor appearing in the film")? else {
            return Ok(false);
        };
        let Some(film) = self.prompt("Enter the name of the film")? else {
            return Ok(false);
        };
        self.index
            .insert_film(&normalize_name(&actor), &normalize_name(&film));
        writeln!(self.output, "Actor added")?;
        self.visualizer.publish(&self.index.snapshot())?;
        Ok(true)
    }

    fn remove(&mut self) -> Result<bool, DriverError> {
        let prompt = "Enter the name of the actor to remove from the list";
        let Some(actor) = self.prompt(prompt)? else {
            return Ok(false);
        };
        if self.index.remove_actor(&normalize_name(&actor))? {
            writeln!(self.output, "Actor removed\n")?;
            self.visualizer.publish(&self.index.snapshot())?;
        } else {
            writeln!(self.output, "Actor not found\n")?;
        }
        Ok(true)
    }

    fn find(&mut self) -> Result<bool, DriverError> {
        let Some(actor) = self.prompt("Enter the name of the actor")? else {
            return Ok(false);
        };
        if self.index.show_actor(&normalize_name(&actor))? {
            writeln!(self.output, "Actor Highlighted\n")?;
            self.visualizer.publish(&self.index.snapshot())?;
        } else {
            writeln!(self.output, "Actor not found\n")?;
        }
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, DriverError> {
        writeln!(self.output, "{text}")?;
        self.read_line()
    }

    /// Next input line without its line break; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, DriverError> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;
    use std::io::Cursor;

    #[derive(Default)]
    struct Recorder(Vec<Snapshot>);

    impl Visualizer for Recorder {
        fn publish(&mut self, snapshot: &Snapshot) -> Result<(), DriverError> {
            self.0.push(snapshot.clone());
            Ok(())
        }
    }

    fn run(index: &mut ActorFilmIndex, script: &str) -> (String, Vec<Snapshot>) {
        let mut out = Vec::new();
        let mut session = Session::new(
            index,
            Cursor::new(script.to_owned()),
            &mut out,
            Recorder::default(),
        );
        session.run().unwrap();
        let published = session.into_visualizer().0;
        (String::from_utf8(out).unwrap(), published)
    }

    #[test]
    fn add_find_remove_flow() {
        let mut idx = ActorFilmIndex::new();
        let script = "add\nkevin bacon (i)\nanimal house (1978)\n\
                      find\nKEVIN BACON (I)\n\
                      find\nkevin bacon (xiv)\n\
                      remove\nkevin bacon (i)\n\
                      remove\nkevin bacon (i)\n\
                      exit\n";
        let (out, published) = run(&mut idx, script);

        assert!(out.contains("Actor added"));
        assert!(out.contains("Actor Highlighted"));
        assert!(out.contains("Actor removed"));
        assert_eq!(out.matches("Actor not found").count(), 2);
        // initial + add + find + remove
        assert_eq!(published.len(), 4);
        assert_eq!(published[1].nodes[0].value, "Kevin_Bacon_(I)\nAnimal_House_(1978)");
        assert!(published[3].nodes.is_empty());
        assert!(idx.is_empty());
    }

    #[test]
    fn unknown_command_and_eof() {
        let mut idx = ActorFilmIndex::new();
        let (out, published) = run(&mut idx, "dance\n");
        assert!(out.contains("Command not recognized"));
        assert_eq!(published.len(), 1);
    }

    #[test]
    fn eof_mid_prompt_ends_session() {
        let mut idx = ActorFilmIndex::new();
        let (_, published) = run(&mut idx, "add\nWinona Ryder\n");
        assert_eq!(published.len(), 1);
        assert!(idx.is_empty());
    }
}
