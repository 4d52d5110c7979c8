use common::config::ApiConfig;
use common::model::student::{Student, StudentDraft};
use common::requests::CreateStudentRequest;
use common::store::{found_student, FetchedStudent, RecordStore, StoreError};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

/// `RecordStore` over the REST collection described by an `ApiConfig`.
///
/// Every request is aborted once `timeout_ms` elapses. Status codes are
/// mapped to `StoreError`: 404 becomes `NotFound`, any other non-2xx
/// `Status`, and a request that never got an answer `Transport`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpStudentStore {
    config: ApiConfig,
}

impl HttpStudentStore {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Sends `builder` (with an optional JSON body) under the configured deadline.
    ///
    /// The deadline travels with the returned [`Exchange`], so it also
    /// covers reading the response body.
    async fn dispatch<B>(
        &self,
        builder: RequestBuilder,
        body: Option<&B>,
    ) -> Result<Exchange, StoreError>
    where
        B: Serialize + ?Sized,
    {
        let controller = AbortController::new().map_err(|_| {
            StoreError::Transport("unable to create abort controller".to_string())
        })?;
        let signal = controller.signal();
        let deadline = Timeout::new(self.config.timeout_ms, move || controller.abort());

        let builder = builder.abort_signal(Some(&signal));
        let sent = match body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| StoreError::Transport(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };

        let timeout_ms = self.config.timeout_ms;
        let response = sent.map_err(|e| transport_error(&signal, timeout_ms, e.to_string()))?;

        match response.status() {
            404 => Err(StoreError::NotFound),
            _ if response.ok() => Ok(Exchange {
                response,
                signal,
                timeout_ms,
                _deadline: deadline,
            }),
            status => Err(StoreError::Status(status)),
        }
    }
}

/// A successful response whose body may still be streaming in.
///
/// Holds the request's deadline: dropping the exchange cancels the timer,
/// keeping it alive lets the timer abort a stalled body.
struct Exchange {
    response: Response,
    signal: AbortSignal,
    timeout_ms: u32,
    _deadline: Timeout,
}

impl Exchange {
    /// Reads and decodes the body before the deadline fires.
    async fn json<T: DeserializeOwned>(self) -> Result<T, StoreError> {
        match self.response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(e) if self.signal.aborted() => {
                Err(transport_error(&self.signal, self.timeout_ms, e.to_string()))
            }
            Err(e) => Err(StoreError::Decode(e.to_string())),
        }
    }
}

/// A failed exchange is reported as a timeout when the deadline aborted it.
fn transport_error(signal: &AbortSignal, timeout_ms: u32, reason: String) -> StoreError {
    if signal.aborted() {
        StoreError::timed_out(timeout_ms)
    } else {
        StoreError::Transport(reason)
    }
}

fn logged<T>(operation: &str, result: Result<T, StoreError>) -> Result<T, StoreError> {
    if let Err(err) = &result {
        warn!("Error {}: {}", operation, err);
    }
    result
}

impl RecordStore for HttpStudentStore {
    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let url = self.config.collection_url();
        info!("GET {}", url);
        let result = async {
            let exchange = self.dispatch(Request::get(&url), None::<&()>).await?;
            exchange.json::<Vec<Student>>().await
        }
        .await;
        logged("fetching students", result)
    }

    async fn fetch_one(&self, id: &str) -> Result<Student, StoreError> {
        let url = self.config.record_url(id);
        info!("GET {}", url);
        let result = async {
            let exchange = self.dispatch(Request::get(&url), None::<&()>).await?;
            found_student(exchange.json::<Option<FetchedStudent>>().await?)
        }
        .await;
        logged("fetching student", result)
    }

    async fn insert(&self, request: &CreateStudentRequest) -> Result<Student, StoreError> {
        let url = self.config.collection_url();
        info!("POST {} (id {})", url, request.id);
        let result = async {
            let exchange = self.dispatch(Request::post(&url), Some(request)).await?;
            exchange.json::<Student>().await
        }
        .await;
        logged("adding student", result)
    }

    async fn update(&self, id: &str, draft: &StudentDraft) -> Result<Student, StoreError> {
        let url = self.config.record_url(id);
        info!("PUT {}", url);
        let result = async {
            let exchange = self.dispatch(Request::put(&url), Some(draft)).await?;
            exchange.json::<Student>().await
        }
        .await;
        logged("updating student", result)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = self.config.record_url(id);
        info!("DELETE {}", url);
        let result = self
            .dispatch(Request::delete(&url), None::<&()>)
            .await
            .map(|_| ());
        logged("deleting student", result)
    }
}
