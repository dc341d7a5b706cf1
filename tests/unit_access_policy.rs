use chrono::Utc;
use registrar::middleware::access::{RoutePolicy, check_ownership, check_role};
use registrar::middleware::principal::{Principal, Role};
use registrar::modules::admins::model::Admin;
use registrar::modules::faculty::model::Faculty;
use registrar::modules::students::model::Student;
use registrar::utils::errors::AccessError;
use uuid::Uuid;

fn admin_principal(id: Uuid) -> Principal {
    Principal::Admin(Admin {
        id,
        first_name: "Ada".to_string(),
        last_name: "Adminson".to_string(),
        email: "ada@example.edu".to_string(),
        phone: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    })
}

fn faculty_principal(id: Uuid) -> Principal {
    Principal::Faculty(Faculty {
        id,
        first_name: "Frank".to_string(),
        last_name: "Facult".to_string(),
        email: "frank@example.edu".to_string(),
        phone: None,
        department: "Mathematics".to_string(),
        designation: "Professor".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    })
}

fn student_principal(id: Uuid) -> Principal {
    Principal::Student(Student {
        id,
        first_name: "Sam".to_string(),
        last_name: "Studer".to_string(),
        email: "sam@example.edu".to_string(),
        phone: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    })
}

#[test]
fn test_policy_permits_listed_roles() {
    let policy = RoutePolicy::roles(&[Role::Admin, Role::Faculty]);

    assert!(policy.permits(Role::Admin));
    assert!(policy.permits(Role::Faculty));
    assert!(!policy.permits(Role::Student));
}

#[test]
fn test_policy_has_no_role_hierarchy() {
    // An admin is not implicitly a member of a faculty-only policy; every
    // role that should pass must be enumerated.
    let policy = RoutePolicy::roles(&[Role::Faculty]);

    assert!(!policy.permits(Role::Admin));
    assert!(policy.permits(Role::Faculty));
}

#[test]
#[should_panic(expected = "at least one role")]
fn test_empty_policy_is_rejected_at_registration() {
    let _ = RoutePolicy::roles(&[]);
}

#[test]
fn test_check_role_allows_member() {
    let policy = RoutePolicy::roles(&[Role::Admin, Role::Student]);
    let principal = student_principal(Uuid::new_v4());

    assert!(check_role(&principal, &policy).is_ok());
}

#[test]
fn test_check_role_denies_non_member() {
    let policy = RoutePolicy::roles(&[Role::Admin]);
    let principal = faculty_principal(Uuid::new_v4());

    assert!(matches!(
        check_role(&principal, &policy),
        Err(AccessError::RoleDenied)
    ));
}

#[test]
fn test_ownership_allows_own_record() {
    let id = Uuid::new_v4();
    let principal = student_principal(id);

    assert!(check_ownership(&principal, Role::Student, id).is_ok());
}

#[test]
fn test_ownership_denies_other_record_of_same_kind() {
    let principal = student_principal(Uuid::new_v4());

    assert!(matches!(
        check_ownership(&principal, Role::Student, Uuid::new_v4()),
        Err(AccessError::OwnershipDenied)
    ));
}

#[test]
fn test_ownership_exempts_other_kinds() {
    // An admin addressing a faculty record is governed by the role gate
    // alone; the ownership guard does not apply across kinds.
    let principal = admin_principal(Uuid::new_v4());

    assert!(check_ownership(&principal, Role::Faculty, Uuid::new_v4()).is_ok());
    assert!(check_ownership(&principal, Role::Student, Uuid::new_v4()).is_ok());
}

#[test]
fn test_faculty_own_profile_binding() {
    let id = Uuid::new_v4();
    let principal = faculty_principal(id);

    assert!(check_ownership(&principal, Role::Faculty, id).is_ok());
    assert!(matches!(
        check_ownership(&principal, Role::Faculty, Uuid::new_v4()),
        Err(AccessError::OwnershipDenied)
    ));
}

#[test]
fn test_owned_kind_configuration() {
    let plain = RoutePolicy::roles(&[Role::Admin]);
    assert_eq!(plain.owned_kind(), None);

    let owned = RoutePolicy::roles(&[Role::Admin]).owned_by(Role::Admin);
    assert_eq!(owned.owned_kind(), Some(Role::Admin));
}

#[test]
fn test_principal_role_and_id() {
    let id = Uuid::new_v4();

    assert_eq!(admin_principal(id).role(), Role::Admin);
    assert_eq!(faculty_principal(id).role(), Role::Faculty);
    assert_eq!(student_principal(id).role(), Role::Student);
    assert_eq!(student_principal(id).id(), id);
}
