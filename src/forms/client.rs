use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::{BirthDate, ChildrenCount, ClientName, Cpf, Income};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// JSON body accepted when creating or replacing a client. Any `id` in the
/// body is ignored.
pub struct ClientForm {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(equal = 11, message = "cpf must contain exactly 11 digits"))]
    pub cpf: String,
    #[validate(range(min = 0.0, message = "income must not be negative"))]
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    #[validate(range(min = 0, message = "children must not be negative"))]
    pub children: i32,
}

type ClientParts = (ClientName, Cpf, Income, BirthDate, ChildrenCount);

impl ClientForm {
    fn into_parts(self) -> Result<ClientParts, FormError> {
        self.validate()?;
        Ok((
            ClientName::new(self.name)?,
            Cpf::new(self.cpf)?,
            Income::new(self.income)?,
            BirthDate::new(self.birth_date)?,
            ChildrenCount::new(self.children)?,
        ))
    }
}

impl TryFrom<ClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        let (name, cpf, income, birth_date, children) = form.into_parts()?;
        Ok(NewClient::new(name, cpf, income, birth_date, children))
    }
}

impl TryFrom<ClientForm> for UpdateClient {
    type Error = FormError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        let (name, cpf, income, birth_date, children) = form.into_parts()?;
        Ok(UpdateClient::new(name, cpf, income, birth_date, children))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::types::TypeConstraintError;
    use crate::forms::field_messages;

    fn form_json() -> serde_json::Value {
        json!({
            "id": null,
            "name": "Lucca Henrique",
            "cpf": "12345678900",
            "income": 5000.0,
            "birthDate": "2003-08-20T07:50:00Z",
            "children": 1
        })
    }

    #[test]
    fn parses_camel_case_body_and_ignores_id() {
        let form: ClientForm = serde_json::from_value(form_json()).unwrap();
        let client = NewClient::try_from(form).unwrap();
        assert_eq!(client.name.as_str(), "Lucca Henrique");
        assert_eq!(client.cpf.as_str(), "12345678900");
        assert_eq!(client.income.get(), 5000.0);
        assert_eq!(
            client.birth_date.get().to_rfc3339(),
            "2003-08-20T07:50:00+00:00"
        );
        assert_eq!(client.children.get(), 1);
    }

    #[test]
    fn missing_field_fails_to_parse() {
        let mut body = form_json();
        body.as_object_mut().unwrap().remove("cpf");
        assert!(serde_json::from_value::<ClientForm>(body).is_err());
    }

    #[test]
    fn rule_violations_are_reported_per_field() {
        let mut body = form_json();
        body["name"] = json!("");
        body["income"] = json!(-1.0);
        body["children"] = json!(-2);
        let form: ClientForm = serde_json::from_value(body).unwrap();

        let err = UpdateClient::try_from(form).unwrap_err();
        let FormError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = field_messages(&errors)
            .into_iter()
            .map(|m| m.field_name)
            .collect();
        assert_eq!(fields, vec!["children", "income", "name"]);
    }

    #[test]
    fn non_digit_cpf_is_a_constraint_error() {
        let mut body = form_json();
        body["cpf"] = json!("123.456.789");
        // 11 characters, passes the length rule
        let form: ClientForm = serde_json::from_value(body).unwrap();

        let err = NewClient::try_from(form).unwrap_err();
        assert!(matches!(
            err,
            FormError::Constraint(TypeConstraintError::InvalidCpf)
        ));
    }
}
