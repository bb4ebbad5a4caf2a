//! Browser console logging.

use storefront::config::StorefrontConfig;
use tracing_subscriber::EnvFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Buffers one formatted event and logs it to the console when dropped.
    #[derive(Debug, Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);

            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();

            if !line.is_empty() {
                web_sys::console::log_1(&JsValue::from_str(line));
            }
        }
    }

    /// Makes a [`ConsoleWriter`] per event.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Console;

    impl<'a> MakeWriter<'a> for Console {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::default()
        }
    }
}

/// Install the log subscriber at the configured level.
///
/// Events go to the browser console; native builds write to stderr. Safe to
/// call more than once; later calls are ignored.
pub fn init(config: &StorefrontConfig) {
    let filter = EnvFilter::new(config.level().as_str().to_lowercase());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(console::Console);

    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.with_writer(std::io::stderr);

    _ = builder.try_init();
}
