use crossbeam::channel::unbounded;

use crate::{
    misc::log::targets::{self},
    procedures::Encoding,
    types::err::ErrorKind,
};

use super::Context;

impl Context {
    /// [Encodes](Context::tseitin_and_variable_map) each formula of `texts`, with formulas distributed across scoped workers.
    ///
    /// Results are returned in the order of `texts`, and an error for some formula has no effect on the encoding of any other formula.
    ///
    /// ```rust
    /// # use otter_cnf::context::Context;
    /// let context = Context::default();
    /// let results = context.encode_batch(&["(a&b)", "(a&", "~a"]);
    ///
    /// assert!(results[0].is_ok());
    /// assert!(results[1].is_err());
    /// assert!(results[2].is_ok());
    /// ```
    pub fn encode_batch(&self, texts: &[&str]) -> Vec<Result<Encoding, ErrorKind>> {
        if texts.is_empty() {
            return Vec::default();
        }

        let workers = std::thread::available_parallelism()
            .map(|count| count.get())
            .unwrap_or(1)
            .min(texts.len());
        let chunk_size = texts.len().div_ceil(workers);

        log::info!(target: targets::CONTEXT, "Encoding {} formulas on {workers} workers", texts.len());

        let (tx, rx) = unbounded::<(usize, Result<Encoding, ErrorKind>)>();

        let scope_result = crossbeam::scope(|scope| {
            for (chunk_index, chunk) in texts.chunks(chunk_size).enumerate() {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    for (offset, text) in chunk.iter().enumerate() {
                        let index = chunk_index * chunk_size + offset;
                        // The receiver outlives every worker.
                        let _ = tx.send((index, self.tseitin_and_variable_map(text)));
                    }
                });
            }
        });

        if let Err(panic) = scope_result {
            std::panic::resume_unwind(panic);
        }
        drop(tx);

        let mut results = Vec::with_capacity(texts.len());
        results.resize_with(texts.len(), || None);
        for (index, result) in rx.iter() {
            results[index] = Some(result);
        }

        results.into_iter().flatten().collect()
    }
}
