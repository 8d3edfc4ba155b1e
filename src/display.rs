use core::fmt;

use crate::core::DynVec;

impl<T: fmt::Display> DynVec<T> {
    /// Writes the live elements as a bracketed, comma-separated list,
    /// e.g. `[1, 2, 3]`. An empty vector renders as `[]`.
    ///
    /// # Errors
    ///
    /// Propagates any error reported by `out`.
    pub fn print<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_char('[')?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            write!(out, "{item}")?;
        }
        out.write_char(']')
    }

    /// Same as [`DynVec::print`], for byte-oriented sinks.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error reported by `out`.
    #[cfg(feature = "std")]
    pub fn print_io<W: std::io::Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{self}")
    }
}

impl<T: fmt::Display> fmt::Display for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
