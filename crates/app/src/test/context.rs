//! Test context for service-level integration tests.

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        links::PgLinksService,
        users::{
            PgUsersService, UsersService,
            data::NewUser,
            records::UserUuid,
        },
        vacuums::PgVacuumsService,
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub user_uuid: UserUuid,
    pub vacuums: PgVacuumsService,
    pub links: PgLinksService,
    pub auth: PgAuthService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let user_uuid = UserUuid::new();

        PgUsersService::new(test_db.pool().clone())
            .create_user(NewUser {
                uuid: user_uuid,
                name: "Test Admin".to_string(),
            })
            .await
            .expect("Failed to create default test user");

        Self {
            vacuums: PgVacuumsService::new(db.clone()),
            links: PgLinksService::new(db),
            auth: PgAuthService::new(test_db.pool().clone()),
            user_uuid,
            db: test_db,
        }
    }

    /// Create an additional user — useful for ownership tests.
    pub(crate) async fn create_user(&self, name: &str) -> UserUuid {
        let uuid = UserUuid::new();

        PgUsersService::new(self.db.pool().clone())
            .create_user(NewUser {
                uuid,
                name: name.to_string(),
            })
            .await
            .expect("Failed to create test user");

        uuid
    }
}
