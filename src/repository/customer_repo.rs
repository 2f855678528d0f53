use crate::model::address::Address;
use crate::model::customer::{Customer, CustomerWithAddresses};
use crate::repository::database::Database;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(&self, customer: Customer) -> RepositoryResult<Customer>;
    async fn add_address(&self, address: Address) -> RepositoryResult<Address>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<CustomerWithAddresses>>;
    async fn find_all(&self) -> RepositoryResult<Vec<CustomerWithAddresses>>;
}

pub struct CustomerRepositoryImpl {
    pool: SqlitePool,
}

impl CustomerRepositoryImpl {
    pub fn new(database: &Database) -> Self {
        CustomerRepositoryImpl { pool: database.pool().clone() }
    }

    async fn addresses_of(&self, customer_id: i64) -> RepositoryResult<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT id, street, city, state, zipcode, customer_id FROM address WHERE customer_id = ? ORDER BY id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to load addresses: {}", e)))?;
        Ok(addresses)
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn insert(&self, mut customer: Customer) -> RepositoryResult<Customer> {
        let result = sqlx::query(
            "INSERT INTO customers (first_name, last_name, email, password) VALUES (?, ?, ?, ?)",
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.password)
        .execute(&self.pool)
        .await?;
        customer.id = Some(result.last_insert_rowid());
        debug!("Inserted customer {:?}", customer.id);
        Ok(customer)
    }

    async fn add_address(&self, mut address: Address) -> RepositoryResult<Address> {
        // The foreign key rejects addresses whose customer does not exist.
        let result = sqlx::query(
            "INSERT INTO address (street, city, state, zipcode, customer_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zipcode)
        .bind(address.customer_id)
        .execute(&self.pool)
        .await?;
        address.id = Some(result.last_insert_rowid());
        Ok(address)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<CustomerWithAddresses>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, first_name, last_name, email, password FROM customers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to find customer by id: {}", e)))?;

        match customer {
            Some(customer) => {
                let addresses = self.addresses_of(id).await?;
                Ok(Some(CustomerWithAddresses { customer, addresses }))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> RepositoryResult<Vec<CustomerWithAddresses>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, first_name, last_name, email, password FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to list customers: {}", e)))?;

        let mut result = Vec::with_capacity(customers.len());
        for customer in customers {
            let addresses = self.addresses_of(customer.id.unwrap_or_default()).await?;
            result.push(CustomerWithAddresses { customer, addresses });
        }
        Ok(result)
    }
}
