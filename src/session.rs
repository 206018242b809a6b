//! # Printer Session
//!
//! The boundary between assembled documents and a physical transport. The
//! session holds one scoped transport, replays block sequences over it, and
//! releases it at the terminal step of every print. The core never sees
//! what the transport is — it only observes whether a session is ready.
//!
//! Real device transports (USB, network port 9100, OS print spoolers) are
//! external collaborators; they plug in through [`Connector::Writer`].

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::block::{Block, Document};
use crate::document::{DocumentContext, receipt, request};
use crate::error::{PrintError, PrintResult};
use crate::lookup::{SettingsStore, TextLookup};
use crate::render;

/// Where print data goes. Kind selection is opaque to the core.
pub enum Connector {
    /// Standard output (the default, handy for previewing).
    Stdout,
    /// A file on disk.
    File(PathBuf),
    /// Any byte sink — the seam a real device transport plugs into.
    Writer(Box<dyn Write + Send>),
}

impl Connector {
    /// Parse a CLI-style descriptor: `-` or `stdout` select stdout,
    /// anything else is a file path. Empty descriptors are invalid.
    pub fn from_descriptor(descriptor: &str) -> PrintResult<Self> {
        match descriptor {
            "" => Err(PrintError::InvalidConnector("empty descriptor".into())),
            "-" | "stdout" => Ok(Self::Stdout),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

/// Text-size multipliers are valid from 1 to 8; anything else becomes 1.
fn normalize_scale(value: u8) -> u8 {
    if (1..=8).contains(&value) { value } else { 1 }
}

/// A print session wrapping one scoped transport.
///
/// ## Example
///
/// ```
/// use bonnetje::session::{Connector, PrinterSession};
///
/// let mut session = PrinterSession::open(Connector::Writer(Box::new(Vec::new()))).unwrap();
/// assert!(session.is_ready());
/// session.close();
/// assert!(!session.is_ready());
/// ```
pub struct PrinterSession {
    transport: Option<Box<dyn Write + Send>>,
    text_size: (u8, u8),
}

impl Default for PrinterSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PrinterSession {
    /// Create a session with no transport. Printing from it fails with
    /// [`PrintError::UninitializedSession`].
    pub fn new() -> Self {
        Self {
            transport: None,
            text_size: (1, 1),
        }
    }

    /// Open a session over the given connector.
    pub fn open(connector: Connector) -> PrintResult<Self> {
        let transport: Box<dyn Write + Send> = match connector {
            Connector::Stdout => Box::new(io::stdout()),
            Connector::File(path) => Box::new(File::create(&path)?),
            Connector::Writer(writer) => writer,
        };
        Ok(Self {
            transport: Some(transport),
            text_size: (1, 1),
        })
    }

    /// Whether a transport is held.
    pub fn is_ready(&self) -> bool {
        self.transport.is_some()
    }

    /// Set text-size multipliers (width × height, 1–8). Out-of-range
    /// values become 1 rather than clamping to the nearest bound.
    pub fn set_text_size(&mut self, width: u8, height: u8) {
        self.text_size = (normalize_scale(width), normalize_scale(height));
        debug!(width = self.text_size.0, height = self.text_size.1, "text size set");
    }

    pub fn text_size(&self) -> (u8, u8) {
        self.text_size
    }

    /// Assemble and print a receipt, then release the transport.
    ///
    /// Fails before emitting anything when the session is not ready or the
    /// context has no order.
    #[instrument(skip(self, ctx, lookup, settings))]
    pub fn print_receipt(
        &mut self,
        ctx: &DocumentContext,
        lookup: &dyn TextLookup,
        settings: &dyn SettingsStore,
        copy: bool,
    ) -> PrintResult<()> {
        if !self.is_ready() {
            return Err(PrintError::UninitializedSession);
        }
        let doc = receipt::assemble(ctx, lookup, settings, copy)?;
        self.transmit(&doc)
    }

    /// Assemble and print a payment request, then release the transport.
    #[instrument(skip_all)]
    pub fn print_request(&mut self, ctx: &DocumentContext) -> PrintResult<()> {
        if !self.is_ready() {
            return Err(PrintError::UninitializedSession);
        }
        let doc = request::assemble(ctx)?;
        self.transmit(&doc)
    }

    /// Replay a document over the transport without closing it.
    pub fn replay(&mut self, doc: &Document) -> PrintResult<()> {
        let transport = self
            .transport
            .as_mut()
            .ok_or(PrintError::UninitializedSession)?;
        let text = render::render_text(doc);
        transport.write_all(text.as_bytes())?;
        transport.flush()?;
        info!(blocks = doc.len(), bytes = text.len(), "document transmitted");
        Ok(())
    }

    /// Replay then close unconditionally — the terminal step of both
    /// document variants, taken on success and on transport failure alike.
    fn transmit(&mut self, doc: &Document) -> PrintResult<()> {
        let result = self.replay(doc);
        self.close();
        result
    }

    /// Feed blank lines directly.
    pub fn feed(&mut self, lines: u8) -> PrintResult<()> {
        let transport = self
            .transport
            .as_mut()
            .ok_or(PrintError::UninitializedSession)?;
        for _ in 0..lines {
            transport.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Cut the paper directly, outside a document.
    pub fn cut(&mut self) -> PrintResult<()> {
        let doc: Document = [Block::Cut].into_iter().collect();
        self.replay(&doc)
    }

    /// Pulse the cash-drawer pin. A no-op on text transports; real drivers
    /// take over behind [`Connector::Writer`].
    pub fn open_drawer(&mut self, pin: u8, on_ms: u16, off_ms: u16) -> PrintResult<()> {
        if !self.is_ready() {
            return Err(PrintError::UninitializedSession);
        }
        debug!(pin, on_ms, off_ms, "drawer pulse requested");
        Ok(())
    }

    /// Release the transport. Safe to call more than once.
    pub fn close(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            let _ = transport.flush();
            debug!("transport released");
        }
    }
}
