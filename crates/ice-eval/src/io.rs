//! Output abstraction for the `tampilkan` builtin.

use std::cell::RefCell;
use std::rc::Rc;

/// Destination for interpreter output.
///
/// `tampilkan` formats its arguments into a single line and hands it here,
/// so embedders (and tests) can capture or redirect program output.
pub trait PrintWriter {
    /// Writes one line of program output, without the trailing newline.
    fn write_line(&mut self, text: &str);
}

/// Default writer: standard output.
pub struct StdPrint;

impl PrintWriter for StdPrint {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Writer that collects all output into a shared string buffer.
///
/// Clones share the buffer, so a caller can keep one handle while moving
/// another into the interpreter.
#[derive(Clone, Default)]
pub struct CollectStringPrint {
    buffer: Rc<RefCell<String>>,
}

impl CollectStringPrint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far.
    pub fn output(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl PrintWriter for CollectStringPrint {
    fn write_line(&mut self, text: &str) {
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(text);
        buffer.push('\n');
    }
}
