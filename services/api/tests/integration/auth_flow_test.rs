use jsonwebtoken::Algorithm;

use gmpanel_api::error::ApiServiceError;
use gmpanel_api::usecase::account::{
    ChangePasswordUseCase, LoginUseCase, RegisterAccountInput, RegisterAccountUseCase,
    UpdateSocialIdUseCase,
};
use gmpanel_api::usecase::guard::AccessGuard;
use gmpanel_domain::authority::AuthorityLevel;

use crate::helpers::{MockAccountRepo, MockGmListRepo, TEST_SECRET};

fn register_input(login: &str) -> RegisterAccountInput {
    RegisterAccountInput {
        login: login.to_owned(),
        password: "hunter2hunter2".to_owned(),
        social_id: "1234567".to_owned(),
        email: format!("{login}@example.com"),
    }
}

fn login_usecase(repo: MockAccountRepo) -> LoginUseCase<MockAccountRepo> {
    LoginUseCase {
        repo,
        secret_key: TEST_SECRET.to_owned(),
        algorithm: Algorithm::HS256,
        expire_minutes: 30,
    }
}

fn guard(accounts: MockAccountRepo, gm_list: MockGmListRepo) -> AccessGuard<MockAccountRepo, MockGmListRepo> {
    AccessGuard {
        accounts,
        gm_list,
        secret_key: TEST_SECRET.to_owned(),
        algorithm: Algorithm::HS256,
    }
}

// ── register → login → me ────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_login_and_resolve_identity() {
    let repo = MockAccountRepo::empty();

    let register = RegisterAccountUseCase { repo: repo.share() };
    let account = register.execute(register_input("newbie")).await.unwrap();
    assert_eq!(account.login, "newbie");
    assert!(account.status.is_active());

    let token = login_usecase(repo.share())
        .execute("newbie", "hunter2hunter2")
        .await
        .unwrap();

    let guard = guard(repo, MockGmListRepo::empty());
    let me = guard.active_account(&token).await.unwrap();
    assert_eq!(me.login, "newbie");
}

#[tokio::test]
async fn should_reject_login_with_wrong_password() {
    let repo = MockAccountRepo::empty();
    RegisterAccountUseCase { repo: repo.share() }
        .execute(register_input("newbie"))
        .await
        .unwrap();

    let result = login_usecase(repo).execute("newbie", "wrong").await;
    assert!(matches!(result, Err(ApiServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_reject_second_registration_with_same_login() {
    let repo = MockAccountRepo::empty();
    let register = RegisterAccountUseCase { repo: repo.share() };
    register.execute(register_input("newbie")).await.unwrap();

    let mut dup = register_input("newbie");
    dup.email = "other@example.com".to_owned();
    let result = register.execute(dup).await;
    assert!(matches!(result, Err(ApiServiceError::LoginTaken)));
}

// ── password change ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_rotate_password_and_invalidate_the_old_one() {
    let repo = MockAccountRepo::empty();
    let account = RegisterAccountUseCase { repo: repo.share() }
        .execute(register_input("newbie"))
        .await
        .unwrap();

    ChangePasswordUseCase { repo: repo.share() }
        .execute(&account, "hunter2hunter2", "correct-horse")
        .await
        .unwrap();

    let old = login_usecase(repo.share())
        .execute("newbie", "hunter2hunter2")
        .await;
    assert!(matches!(old, Err(ApiServiceError::Unauthorized)));
    assert!(login_usecase(repo).execute("newbie", "correct-horse").await.is_ok());
}

#[tokio::test]
async fn should_require_the_current_password_to_change_it() {
    let repo = MockAccountRepo::empty();
    let account = RegisterAccountUseCase { repo: repo.share() }
        .execute(register_input("newbie"))
        .await
        .unwrap();

    let result = ChangePasswordUseCase { repo }
        .execute(&account, "not-the-password", "correct-horse")
        .await;
    assert!(matches!(result, Err(ApiServiceError::Unauthorized)));
}

// ── social id ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_social_id_when_it_is_seven_digits() {
    let repo = MockAccountRepo::empty();
    let account = RegisterAccountUseCase { repo: repo.share() }
        .execute(register_input("newbie"))
        .await
        .unwrap();

    let updated = UpdateSocialIdUseCase { repo: repo.share() }
        .execute(&account, "7654321")
        .await
        .unwrap();
    assert_eq!(updated.social_id, "7654321");

    let result = UpdateSocialIdUseCase { repo }
        .execute(&account, "76543")
        .await;
    assert!(matches!(result, Err(ApiServiceError::InvalidSocialId)));
}

// ── authority levels across the whole chain ──────────────────────────────────

#[tokio::test]
async fn should_forbid_god_on_an_implementor_route() {
    let repo = MockAccountRepo::empty();
    RegisterAccountUseCase { repo: repo.share() }
        .execute(register_input("gm_karl"))
        .await
        .unwrap();
    let token = login_usecase(repo.share())
        .execute("gm_karl", "hunter2hunter2")
        .await
        .unwrap();

    let guard = guard(repo, MockGmListRepo::with_grant("gm_karl", "GOD"));
    let result = guard
        .require_level(&token, AuthorityLevel::Implementor)
        .await;
    match result {
        Err(ApiServiceError::Forbidden { required, current }) => {
            assert_eq!(required, AuthorityLevel::Implementor);
            assert_eq!(current, "GOD");
        }
        other => panic!("expected Forbidden, got {other:?}"),
    }
}

#[tokio::test]
async fn should_admit_implementor_on_an_implementor_route() {
    let repo = MockAccountRepo::empty();
    RegisterAccountUseCase { repo: repo.share() }
        .execute(register_input("gm_root"))
        .await
        .unwrap();
    let token = login_usecase(repo.share())
        .execute("gm_root", "hunter2hunter2")
        .await
        .unwrap();

    let guard = guard(repo, MockGmListRepo::with_grant("gm_root", "IMPLEMENTOR"));
    let account = guard
        .require_level(&token, AuthorityLevel::Implementor)
        .await
        .unwrap();
    assert_eq!(account.login, "gm_root");
}

#[tokio::test]
async fn should_treat_account_without_grant_as_lowest_level() {
    let repo = MockAccountRepo::empty();
    RegisterAccountUseCase { repo: repo.share() }
        .execute(register_input("civilian"))
        .await
        .unwrap();
    let token = login_usecase(repo.share())
        .execute("civilian", "hunter2hunter2")
        .await
        .unwrap();

    let guard = guard(repo, MockGmListRepo::empty());
    let result = guard.require_level(&token, AuthorityLevel::LowWizard).await;
    assert!(matches!(result, Err(ApiServiceError::Forbidden { .. })));
}
