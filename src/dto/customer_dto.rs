use serde::{Deserialize, Serialize};

use crate::model::address::Address;
use crate::model::customer::CustomerWithAddresses;

/// Wire shape of an address: `id, street, city, state, zipcode, customer_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResponseDto {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub customer_id: i64,
}

impl From<Address> for AddressResponseDto {
    fn from(address: Address) -> Self {
        AddressResponseDto {
            id: address.id.unwrap_or_default(),
            street: address.street,
            city: address.city,
            state: address.state,
            zipcode: address.zipcode,
            customer_id: address.customer_id,
        }
    }
}

/// Wire shape of a customer: `id, first_name, last_name, email, password, address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponseDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub address: Vec<AddressResponseDto>,
}

impl From<CustomerWithAddresses> for CustomerResponseDto {
    fn from(value: CustomerWithAddresses) -> Self {
        let customer = value.customer;
        CustomerResponseDto {
            id: customer.id.unwrap_or_default(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            password: customer.password,
            address: value.addresses.into_iter().map(AddressResponseDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::customer::Customer;

    #[test]
    fn test_customer_response_nests_addresses() {
        let value = CustomerWithAddresses {
            customer: Customer {
                id: Some(1),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: "grace@example.com".to_string(),
                password: "cobol".to_string(),
            },
            addresses: vec![Address {
                id: Some(10),
                street: "1 Navy Way".to_string(),
                city: "Arlington".to_string(),
                state: "VA".to_string(),
                zipcode: "22202".to_string(),
                customer_id: 1,
            }],
        };

        let json = serde_json::to_value(CustomerResponseDto::from(value)).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 6);
        assert_eq!(json["address"][0]["customer_id"], 1);
        assert_eq!(json["address"][0]["zipcode"], "22202");
    }
}
