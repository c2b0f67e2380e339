//! Allersift engine: session orchestration around an SLM backend.

use allersift_abi::backend::SlmBackend;
use allersift_abi::config::SessionConfig;
use allersift_abi::error::{InferError, InferResult};

use crate::filter::{filter_allergens, render_allergens};
use crate::metrics::MetricsReport;
use crate::report::InferenceOutcome;

// Child modules (private to this crate). They can access private fields here.
mod decode;
mod prefill;

/// Engine = {loaded backend session} + {session config}.
/// One `SlmEngine` is one loaded model; each `infer` call is independent.
pub struct SlmEngine<B: SlmBackend> {
    backend: B,
    config: SessionConfig,
}

impl<B: SlmBackend> SlmEngine<B> {
    /// Load the backend for `config` and wrap it. Model, context and
    /// sampler are all released when the engine drops, on every exit path.
    pub fn new(config: SessionConfig) -> InferResult<Self> {
        let backend = B::load(&config)?;
        Ok(Self::with_backend(backend, config))
    }

    /// Wrap an already-loaded backend (also the seam tests inject through).
    pub fn with_backend(backend: B, config: SessionConfig) -> Self {
        Self { backend, config }
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ─────────────────────────────────────────────
    // Public inference APIs
    // ─────────────────────────────────────────────

    /// Full pipeline, rendered to the wire string:
    /// `TTFT_MS=..;ITPS=..;OTPS=..;OET_MS=..|<allergens_or_EMPTY>`.
    pub fn infer(&mut self, prompt: &str) -> InferResult<String> {
        Ok(self.run(prompt)?.render())
    }

    /// Legacy surface: any hard failure collapses to an empty string, as the
    /// original on-device binding behaved. Prefer [`infer`](Self::infer).
    pub fn infer_or_empty(&mut self, prompt: &str) -> String {
        match self.infer(prompt) {
            Ok(rendered) => rendered,
            Err(e) => {
                eprintln!("❌ [infer] {e}");
                String::new()
            }
        }
    }

    /// Run the pipeline and keep the pieces structured.
    pub fn run(&mut self, prompt: &str) -> InferResult<InferenceOutcome> {
        let t_start = std::time::Instant::now();
        println!("🧠 [infer] Starting allergen inference");

        // Tokenize (backend prepends BOS). Zero tokens is a hard failure:
        // no partial telemetry, nothing to prefill.
        let prompt_tokens = self.backend.tokenize(prompt)?;
        if prompt_tokens.is_empty() {
            eprintln!("❌ [infer] Tokenizer produced no tokens");
            return Err(InferError::Tokenization(
                "tokenizer produced no tokens".into(),
            ));
        }
        println!("🔤 [infer] Tokenized prompt ({} tokens)", prompt_tokens.len());

        // Prefill: one forward pass over the whole prompt. Fatal on failure.
        let prefill = self.prefill(&prompt_tokens)?;

        // Decode loop: every exit (EOS, newline, soft failure, budget) is a
        // normal termination with whatever text accumulated.
        let decoded = self.decode_loop(prefill.cursor, prompt_tokens.len(), t_start);
        println!("📝 [infer] Raw model output: {}", decoded.text);

        let allergens = filter_allergens(&decoded.text);
        println!("🧪 [infer] Filtered output: {}", render_allergens(&allergens));

        let metrics = MetricsReport {
            ttft_ms: decoded.ttft_ms,
            itps: prefill.itps,
            otps: decoded.otps,
            oet_ms: decoded.oet_ms,
        };

        Ok(InferenceOutcome {
            metrics,
            raw_text: decoded.text,
            allergens,
        })
    }
}

// NOTE: The heavy lifting lives in child modules as `impl SlmEngine<B>`
// with `pub(super)` methods called above:
//
// - prefill.rs: prefill(...) → PrefillOutcome
// - decode.rs:  decode_loop(...) → DecodeOutcome
