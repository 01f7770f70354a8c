use std::pin::Pin;
use std::sync::Arc;

use reagent_model::{
    CompletionProvider, CompletionProviderError, CompletionRequest,
};
use tracing::Instrument;

type CompleteResult = Result<String, Box<dyn CompletionProviderError>>;
type BoxedCompleteFuture =
    Pin<Box<dyn Future<Output = CompleteResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(CompletionRequest) -> BoxedCompleteFuture + Send + Sync>;

/// A wrapper around a completion provider that provides a type-erased
/// interface for the other modules.
#[derive(Clone)]
pub struct CompletionClient {
    handler_fn: HandlerFn,
}

impl CompletionClient {
    #[inline]
    pub fn new<P: CompletionProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `CompletionClient` doesn't
        // have a generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.complete(&req);
            Box::pin(
                async move {
                    trace!("sending a prompt of {} bytes", req.prompt.len());
                    match fut.await {
                        Ok(output) => {
                            trace!(
                                "received {} bytes of output",
                                output.len()
                            );
                            Ok(output)
                        }
                        Err(err) => {
                            error!("got an error: {err:?}");
                            Err(Box::new(err)
                                as Box<dyn CompletionProviderError>)
                        }
                    }
                }
                .instrument(trace_span!("completion req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and returns the raw output text.
    #[inline]
    pub async fn complete(&self, req: CompletionRequest) -> CompleteResult {
        (self.handler_fn)(req).await
    }
}
