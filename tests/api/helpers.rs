use reqwest::{cookie::Jar, Client, Response};
use secrecy::Secret;
use std::sync::Arc;
use study_group::{
    app_state::{AppState, AssignmentStoreType, MemberStoreType},
    domain::{
        Assignment, AssignmentFields, Member, MemberFields, RecordStore,
    },
    services::{
        data_stores::{HashmapRecordStore, PostgrestRecordStore},
        session_store::SessionStore,
    },
    utils::constants::{test, GATE_PASSCODE},
    Application,
};
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub address: String,
    pub cookie_jar: Arc<Jar>,
    pub http_client: Client,
    pub member_store: MemberStoreType,
    pub assignment_store: AssignmentStoreType,
    pub sessions: SessionStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let member_store: MemberStoreType =
            Arc::new(RwLock::new(HashmapRecordStore::<Member>::default()));
        Self::with_member_store(member_store).await
    }

    /// An app whose member table sits behind a PostgREST server that fails
    /// every request.
    pub async fn with_failing_member_store() -> (Self, MockServer) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let http_client = Client::builder()
            .timeout(test::record_store::TIMEOUT)
            .build()
            .unwrap();
        let member_store: MemberStoreType =
            Arc::new(RwLock::new(PostgrestRecordStore::<Member>::new(
                server.uri(),
                Secret::new("test-api-key".to_owned()),
                http_client,
            )));

        (Self::with_member_store(member_store).await, server)
    }

    async fn with_member_store(member_store: MemberStoreType) -> Self {
        let assignment_store: AssignmentStoreType =
            Arc::new(RwLock::new(HashmapRecordStore::<Assignment>::default()));
        let sessions = SessionStore::default();

        let app_state = AppState::new(
            member_store.clone(),
            assignment_store.clone(),
            sessions.clone(),
        );

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let cookie_jar = Arc::new(Jar::default());
        let http_client = Client::builder()
            .cookie_provider(cookie_jar.clone())
            .build()
            .unwrap();

        Self {
            address,
            cookie_jar,
            http_client,
            member_store,
            assignment_store,
            sessions,
        }
    }

    /// A second browser: shares the server, not the session.
    pub fn other_browser(&self) -> Client {
        Client::builder()
            .cookie_provider(Arc::new(Jar::default()))
            .build()
            .unwrap()
    }

    pub async fn get_index(&self) -> Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_page_html(&self) -> String {
        self.get_index()
            .await
            .text()
            .await
            .expect("Failed to read response body")
    }

    pub async fn post(&self, path: &str) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form<Body>(&self, path: &str, body: &Body) -> Response
    where
        Body: serde::Serialize + ?Sized,
    {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_gate(&self, resource: &str, password: &str) -> Response {
        self.post_form(
            &format!("/{resource}/gate"),
            &[("password", password)],
        )
        .await
    }

    /// Requests the action at `path` and unlocks the gate with the right
    /// passcode. Returns the page rendered after the gate closed.
    pub async fn unlock(&self, resource: &str, path: &str) -> String {
        self.post(path).await;
        self.post_gate(resource, GATE_PASSCODE)
            .await
            .text()
            .await
            .expect("Failed to read response body")
    }

    pub async fn seed_member(&self, name: &str, code: &str) -> Member {
        let items = self
            .member_store
            .write()
            .await
            .insert(&MemberFields {
                name: name.to_owned(),
                code: code.to_owned(),
                email: format!("{}@example.com", code.to_lowercase()),
                github: None,
                photo_url: None,
            })
            .await
            .expect("Failed to seed member");
        items
            .into_iter()
            .find(|member| member.fields.code == code)
            .expect("Seeded member missing from listing")
    }

    pub async fn seed_assignment(&self, title: &str) -> Assignment {
        let items = self
            .assignment_store
            .write()
            .await
            .insert(&AssignmentFields {
                title: title.to_owned(),
                description: None,
                link: None,
            })
            .await
            .expect("Failed to seed assignment");
        items
            .into_iter()
            .find(|assignment| assignment.fields.title == title)
            .expect("Seeded assignment missing from listing")
    }

    pub async fn members(&self) -> Vec<Member> {
        self.member_store.read().await.list().await.unwrap()
    }

    pub async fn assignments(&self) -> Vec<Assignment> {
        self.assignment_store.read().await.list().await.unwrap()
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {}
}

/// Byte offset of `needle` in `haystack`, for asserting render order.
pub fn position_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in page"))
}
