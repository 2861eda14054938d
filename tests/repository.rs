use chrono::{TimeZone, Utc};
use client_resource::domain::client::{NewClient, UpdateClient};
use client_resource::domain::types::{
    BirthDate, ChildrenCount, ClientId, ClientName, Cpf, Income,
};
use client_resource::repository::errors::RepositoryError;
use client_resource::repository::{
    ClientListQuery, ClientReader, ClientWriter, DieselRepository, SortDirection, SortField,
};

mod common;

fn new_client(name: &str, cpf: &str, income: f64, children: i32) -> NewClient {
    NewClient::new(
        ClientName::new(name).unwrap(),
        Cpf::new(cpf).unwrap(),
        Income::new(income).unwrap(),
        BirthDate::new(Utc.with_ymd_and_hms(1990, 1, 15, 12, 0, 0).unwrap()).unwrap(),
        ChildrenCount::new(children).unwrap(),
    )
}

fn names(items: &[client_resource::domain::client::Client]) -> Vec<&str> {
    items.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_client_repository_crud() {
    let test_db = common::TestDb::new("test_client_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_client(&new_client("Alice", "11111111111", 2500.0, 0))
        .unwrap();
    let bob = repo
        .create_client(&new_client("Bob", "22222222222", 4000.0, 2))
        .unwrap();
    assert_ne!(alice.id, bob.id);
    assert_eq!(
        alice.birth_date.get(),
        Utc.with_ymd_and_hms(1990, 1, 15, 12, 0, 0).unwrap()
    );

    let (total, items) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(names(&items), vec!["Alice", "Bob"]);

    let updates = UpdateClient::new(
        ClientName::new("Bobby").unwrap(),
        bob.cpf.clone(),
        Income::new(4500.0).unwrap(),
        bob.birth_date,
        ChildrenCount::new(3).unwrap(),
    );
    let updated = repo.update_client(bob.id, &updates).unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.name.as_str(), "Bobby");
    assert_eq!(updated.income.get(), 4500.0);
    assert_eq!(updated.children.get(), 3);

    repo.delete_client(alice.id).unwrap();
    assert!(repo.get_client_by_id(alice.id).unwrap().is_none());

    let (total_after, items_after) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total_after, 1);
    assert_eq!(items_after[0].name.as_str(), "Bobby");
}

#[test]
fn test_missing_client_mutations_are_not_found() {
    let test_db = common::TestDb::new("test_missing_client_mutations_are_not_found.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let missing = ClientId::new(999).unwrap();

    let updates = UpdateClient::new(
        ClientName::new("Ghost").unwrap(),
        Cpf::new("00000000000").unwrap(),
        Income::new(1.0).unwrap(),
        BirthDate::new(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()).unwrap(),
        ChildrenCount::new(0).unwrap(),
    );
    assert!(matches!(
        repo.update_client(missing, &updates),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_client(missing),
        Err(RepositoryError::NotFound)
    ));

    let (total, _) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_income_filters() {
    let test_db = common::TestDb::new("test_income_filters.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    repo.create_client(&new_client("Low", "11111111111", 1000.0, 0))
        .unwrap();
    repo.create_client(&new_client("Edge", "22222222222", 3000.0, 0))
        .unwrap();
    repo.create_client(&new_client("High", "33333333333", 5000.0, 0))
        .unwrap();

    let (total, items) = repo
        .list_clients(ClientListQuery::new().income(3000.0))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(names(&items), vec!["Edge"]);

    let (total, items) = repo
        .list_clients(ClientListQuery::new().income_greater_than(3000.0))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(names(&items), vec!["High"]);

    let (total, _) = repo
        .list_clients(ClientListQuery::new().income(1234.5))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_cpf_prefix_filter() {
    let test_db = common::TestDb::new("test_cpf_prefix_filter.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    repo.create_client(&new_client("Match", "10919444522", 1.0, 0))
        .unwrap();
    repo.create_client(&new_client("Inside", "99109194445", 1.0, 0))
        .unwrap();
    repo.create_client(&new_client("Other", "12345678900", 1.0, 0))
        .unwrap();

    let (total, items) = repo
        .list_clients(ClientListQuery::new().cpf_prefix("109194445"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(names(&items), vec!["Match"]);

    // Wildcards are literal, not patterns.
    let (total, _) = repo
        .list_clients(ClientListQuery::new().cpf_prefix("%"))
        .unwrap();
    assert_eq!(total, 0);
    let (total, _) = repo
        .list_clients(ClientListQuery::new().cpf_prefix("_0919444522"))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_sorting_and_paging() {
    let test_db = common::TestDb::new("test_sorting_and_paging.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    for (name, income) in [("Carla", 3000.0), ("Ana", 7000.0), ("Bruno", 1000.0)] {
        repo.create_client(&new_client(name, "12345678900", income, 1))
            .unwrap();
    }

    let (_, by_income_desc) = repo
        .list_clients(ClientListQuery::new().order_by(SortField::Income, SortDirection::Desc))
        .unwrap();
    assert_eq!(names(&by_income_desc), vec!["Ana", "Carla", "Bruno"]);

    let (total, second_page) = repo
        .list_clients(ClientListQuery::new().paginate(1, 2))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(names(&second_page), vec!["Carla"]);

    let (total, beyond) = repo
        .list_clients(ClientListQuery::new().paginate(5, 2))
        .unwrap();
    assert_eq!(total, 3);
    assert!(beyond.is_empty());

    // Equal sort keys fall back to id order.
    let (_, by_children) = repo
        .list_clients(ClientListQuery::new().order_by(SortField::Children, SortDirection::Asc))
        .unwrap();
    assert_eq!(names(&by_children), vec!["Carla", "Ana", "Bruno"]);
}
