//! Service tests for department and profile administration.

use std::sync::Arc;

use crate::directory::{
    adapters::memory::InMemoryDirectory,
    domain::DirectoryDomainError,
    services::{DirectoryService, DirectoryServiceError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = DirectoryService<InMemoryDirectory, DefaultClock>;

#[fixture]
fn service() -> TestService {
    DirectoryService::new(Arc::new(InMemoryDirectory::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_department_persists_and_lists(service: TestService) {
    let created = service
        .create_department("Comercial", Some("Vendas e pós-venda".to_owned()), None)
        .await
        .expect("department creation should succeed");

    let listed = service
        .list_departments()
        .await
        .expect("listing should succeed");

    assert_eq!(listed, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_department_rejects_blank_name(service: TestService) {
    let result = service.create_department("   ", None, None).await;
    assert!(matches!(
        result,
        Err(DirectoryServiceError::Domain(
            DirectoryDomainError::EmptyDepartmentName
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_department_is_blocked_while_members_remain(service: TestService) {
    let department = service
        .create_department("Financeiro", None, Some("#2dd4bf".to_owned()))
        .await
        .expect("department creation should succeed");
    service
        .create_profile("Ana Souza", Some(department.id()))
        .await
        .expect("profile creation should succeed");

    let blocked = service.delete_department(department.id()).await;

    assert!(matches!(
        blocked,
        Err(DirectoryServiceError::DepartmentInUse { members: 1, .. })
    ));
    let still_there = service
        .list_departments()
        .await
        .expect("listing should succeed");
    assert_eq!(still_there.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_department_succeeds_after_members_move_out(service: TestService) {
    let department = service
        .create_department("Suporte", None, None)
        .await
        .expect("department creation should succeed");
    let profile = service
        .create_profile("Bruno Lima", Some(department.id()))
        .await
        .expect("profile creation should succeed");

    service
        .assign_department(profile.id(), None)
        .await
        .expect("unassignment should succeed");
    service
        .delete_department(department.id())
        .await
        .expect("deletion should succeed once empty");

    let remaining = service
        .list_departments()
        .await
        .expect("listing should succeed");
    assert!(remaining.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_profile_rejects_unknown_department(service: TestService) {
    let ghost = crate::directory::domain::DepartmentId::new();
    let result = service.create_profile("Carla Dias", Some(ghost)).await;
    assert!(matches!(
        result,
        Err(DirectoryServiceError::UnknownDepartment(id)) if id == ghost
    ));
}
