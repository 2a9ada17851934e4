//! Byte sinks.
//!
//! The engine only ever needs to hand over one byte at a time, so a sink is
//! a single-method trait. Two shapes cover the entry points: an unbounded
//! forwarder ([`FnSink`], [`IoSink`], `Vec<u8>`) and a fixed-capacity
//! memory stream ([`BoundedSink`]) that drops whatever does not fit.

/// Accepts formatted output one byte at a time.
pub trait Sink {
    fn put(&mut self, byte: u8);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn put(&mut self, byte: u8) {
        (**self).put(byte);
    }
}

/// Unbounded sink forwarding every byte to a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(u8)> Sink for FnSink<F> {
    fn put(&mut self, byte: u8) {
        (self.0)(byte);
    }
}

#[cfg(any(test, feature = "alloc"))]
impl Sink for alloc::vec::Vec<u8> {
    fn put(&mut self, byte: u8) {
        self.push(byte);
    }
}

/// Fixed-capacity memory stream.
///
/// Invariant: `eos <= data.len()`. Writes past capacity are discarded
/// silently; callers that need the untruncated length take it from the
/// engine's return value.
#[derive(Debug)]
pub struct BoundedSink<'a> {
    data: &'a mut [u8],
    /// End of stream: number of bytes stored so far.
    eos: usize,
}

impl<'a> BoundedSink<'a> {
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, eos: 0 }
    }

    /// Bytes stored so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.eos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eos == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// True once no further byte will be stored.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.eos == self.data.len()
    }

    /// The stored prefix of the output.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.eos]
    }
}

impl Sink for BoundedSink<'_> {
    fn put(&mut self, byte: u8) {
        if let Some(slot) = self.data.get_mut(self.eos) {
            *slot = byte;
            self.eos += 1;
        }
    }
}

/// Sink over a [`std::io::Write`] stream.
///
/// The first I/O error is latched and every later byte is dropped; the
/// engine still reports the length that would have been written without
/// the error. Wrap unbuffered handles in a `BufWriter`, since each byte is
/// a separate `write_all`.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
    error: Option<std::io::Error>,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Returns true if a write has failed.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flush the stream and hand it back, or the first error seen.
    pub fn finish(mut self) -> std::io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    fn put(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.inner.write_all(&[byte]) {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_bounded_stops_at_capacity() {
        let mut storage = [0u8; 3];
        let mut sink = BoundedSink::new(&mut storage);
        for &b in b"hello" {
            sink.put(b);
        }
        assert_eq!(sink.len(), 3);
        assert!(sink.is_full());
        assert_eq!(sink.as_bytes(), b"hel");
    }

    #[test]
    fn test_bounded_zero_capacity() {
        let mut sink = BoundedSink::new(&mut []);
        sink.put(b'x');
        assert!(sink.is_empty());
        assert_eq!(sink.capacity(), 0);
    }

    #[test]
    fn test_fn_sink_forwards() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|b: u8| seen.push(b));
            sink.put(b'a');
            sink.put(b'b');
        }
        assert_eq!(seen, b"ab");
    }

    #[test]
    fn test_mut_ref_is_a_sink() {
        fn feed<S: Sink>(mut s: S) {
            s.put(b'z');
        }
        let mut out = Vec::<u8>::new();
        feed(&mut out);
        feed(&mut out);
        assert_eq!(out, b"zz");
    }
}
