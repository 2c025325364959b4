use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};
use wiremock::http::Method;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Starts an in-process stand-in for the remote collaborator.
///
/// A single stateful responder implements the documented CRUD contract:
/// sequential id assignment on create (single or batch), partial merge on PUT,
/// 404 for unknown ids. State lives for the lifetime of the returned server.
pub async fn start_mock_bank() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(MockBank::default())
        .mount(&server)
        .await;

    server
}

#[derive(Clone, Default)]
struct MockBank {
    records: Arc<Mutex<Vec<Map<String, Value>>>>,
    next_id: Arc<AtomicU64>,
}

impl MockBank {
    fn assign_id(&self, mut record: Map<String, Value>) -> Map<String, Value> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        record.insert("id".to_string(), Value::String(id.to_string()));
        record
    }

    fn list(&self) -> ResponseTemplate {
        let records = self.records.lock().unwrap();
        let body: Vec<Value> = records.iter().cloned().map(Value::Object).collect();

        ResponseTemplate::new(200).set_body_json(Value::Array(body))
    }

    fn create(&self, body: Value) -> ResponseTemplate {
        match body {
            Value::Object(record) => {
                let record = self.assign_id(record);
                self.records.lock().unwrap().push(record.clone());

                ResponseTemplate::new(201).set_body_json(Value::Object(record))
            }
            Value::Array(items) => {
                let mut created = Vec::with_capacity(items.len());

                for item in items {
                    let Value::Object(record) = item else {
                        return ResponseTemplate::new(400);
                    };

                    let record = self.assign_id(record);
                    self.records.lock().unwrap().push(record.clone());
                    created.push(Value::Object(record));
                }

                ResponseTemplate::new(201).set_body_json(Value::Array(created))
            }
            _ => ResponseTemplate::new(400),
        }
    }

    fn fetch(&self, id: &str) -> ResponseTemplate {
        let records = self.records.lock().unwrap();

        match records.iter().find(|record| record_id(record) == Some(id)) {
            Some(record) => ResponseTemplate::new(200).set_body_json(Value::Object(record.clone())),
            None => ResponseTemplate::new(404),
        }
    }

    fn update(&self, id: &str, body: Value) -> ResponseTemplate {
        let Value::Object(patch) = body else {
            return ResponseTemplate::new(400);
        };

        let mut records = self.records.lock().unwrap();

        match records.iter_mut().find(|record| record_id(record) == Some(id)) {
            Some(record) => {
                for (field, value) in patch {
                    record.insert(field, value);
                }

                ResponseTemplate::new(200).set_body_json(Value::Object(record.clone()))
            }
            None => ResponseTemplate::new(404),
        }
    }

    fn delete(&self, id: &str) -> ResponseTemplate {
        let mut records = self.records.lock().unwrap();
        let before = records.len();

        records.retain(|record| record_id(record) != Some(id));

        if records.len() == before {
            ResponseTemplate::new(404)
        } else {
            ResponseTemplate::new(200)
        }
    }
}

fn record_id(record: &Map<String, Value>) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

impl Respond for MockBank {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let method = &request.method;
        let id = request.url.path().trim_start_matches('/');

        if id.is_empty() {
            if method == &Method::GET {
                return self.list();
            }

            if method == &Method::POST {
                return match serde_json::from_slice(&request.body) {
                    Ok(body) => self.create(body),
                    Err(_) => ResponseTemplate::new(400),
                };
            }

            return ResponseTemplate::new(404);
        }

        if method == &Method::GET {
            return self.fetch(id);
        }

        if method == &Method::PUT {
            return match serde_json::from_slice(&request.body) {
                Ok(body) => self.update(id, body),
                Err(_) => ResponseTemplate::new(400),
            };
        }

        if method == &Method::DELETE {
            return self.delete(id);
        }

        ResponseTemplate::new(404)
    }
}
