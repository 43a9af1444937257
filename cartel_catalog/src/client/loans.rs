use crate::api::{Loan, LoanDirection, LoanId, LoanSearch, PersonId};
use crate::client::{query_pairs, ApiRequest, Gateway, GatewayError};

const LOANS: &str = "/api/public/loans";

/// Query pairs of a loan search, `person*` keys renamed after the role of the person
fn loan_filters(
    direction: LoanDirection,
    search: &LoanSearch,
) -> Result<Vec<(String, String)>, GatewayError> {
    let role = direction.person_role();
    Ok(query_pairs(search)?
        .into_iter()
        .map(|(key, value)| match key.strip_prefix("person") {
            Some(rest) => (format!("{role}{rest}"), value),
            None => (key, value),
        })
        .collect())
}

pub struct LoansService<'a> {
    gateway: &'a Gateway,
}

impl<'a> LoansService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Calls GET /api/public/loans/{direction} endpoint with the set filters
    pub async fn list(
        &self,
        direction: LoanDirection,
        search: &LoanSearch,
    ) -> Result<Vec<Loan>, GatewayError> {
        let request =
            ApiRequest::get(format!("{LOANS}/{direction}")).params(loan_filters(direction, search)?);
        self.gateway.fetch_json(request).await
    }

    /// Calls GET /api/public/loans/{direction}/all/ endpoint
    pub async fn all(&self, direction: LoanDirection) -> Result<Vec<Loan>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get(format!("{LOANS}/{direction}/all/")))
            .await
    }

    pub async fn get(&self, direction: LoanDirection, id: LoanId) -> Result<Loan, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get(format!("{LOANS}/{direction}")).segment(id))
            .await
    }

    /// Calls POST /api/public/loans/{direction}/addById endpoint, returns the backend confirmation
    pub async fn create(
        &self,
        direction: LoanDirection,
        person_id: PersonId,
        copy_id: i64,
    ) -> Result<String, GatewayError> {
        self.gateway
            .fetch_text(
                ApiRequest::post(format!("{LOANS}/{direction}/addById"))
                    .param("personId", person_id)
                    .param("itemCopyId", copy_id),
            )
            .await
    }

    /// Lends an item to the Cartel, the backend creates the copy on the fly
    pub async fn create_to_cartel_by_item(
        &self,
        person_id: PersonId,
        item_id: &str,
    ) -> Result<String, GatewayError> {
        self.gateway
            .fetch_text(
                ApiRequest::post(format!("{LOANS}/toCartel/addByItemId"))
                    .param("personId", person_id)
                    .param("itemId", item_id),
            )
            .await
    }

    /// Calls POST /api/public/loans/{direction}/{id}/complete endpoint
    pub async fn complete(
        &self,
        direction: LoanDirection,
        id: LoanId,
    ) -> Result<String, GatewayError> {
        self.gateway
            .fetch_text(
                ApiRequest::post(format!("{LOANS}/{direction}"))
                    .segment(id)
                    .segment("complete"),
            )
            .await
    }

    pub async fn delete(&self, direction: LoanDirection, id: LoanId) -> Result<bool, GatewayError> {
        self.gateway
            .execute(ApiRequest::delete(format!("{LOANS}/{direction}")).segment(id))
            .await
    }

    /// Calls GET /api/public/loans/check/sharable/{item_id} endpoint
    pub async fn is_sharable(&self, item_id: &str) -> Result<bool, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get(format!("{LOANS}/check/sharable")).segment(item_id))
            .await
    }
}
