use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client,
    Response,
    StatusCode,
    multipart::{Form, Part},
};
use url::Url;

use crate::{
    Error,
    error::Result,
};

use super::{
    contact::{Contact, ContactId},
    service::ContactService,
};

const CONTACTS_PATH: &str = "api/contacts";
const SPREADSHEET_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// HTTP client of the contact REST API.
pub struct APIClient {
    base_url    : Url,
    client      : Client,
}

impl APIClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("Invalid api url: {}", base_url)));
        }
        // Keep any path prefix when joining relative endpoints.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().build().map_err(|e| {
            Error::Network(format!("Http error: building http client error {e}"))
        })?;

        Ok(Self {
            base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) fn contacts_url(&self) -> Result<Url> {
        self.endpoint(CONTACTS_PATH)
    }

    pub(crate) fn contact_url(&self, id: ContactId) -> Result<Url> {
        self.endpoint(&format!("{}/{}", CONTACTS_PATH, id))
    }

    pub(crate) fn contact_child_url(&self, id: ContactId, child: &str) -> Result<Url> {
        self.endpoint(&format!("{}/{}/{}", CONTACTS_PATH, id, child))
    }

    pub(crate) fn collection_child_url(&self, child: &str) -> Result<Url> {
        self.endpoint(&format!("{}/{}", CONTACTS_PATH, child))
    }

    async fn fetch_list(&self, url: Url) -> Result<Vec<Contact>> {
        debug!("GET {}", url);
        let rsp = self.client.get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let rsp = check_status(rsp).await?;
        rsp.json::<Vec<Contact>>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })
    }

    async fn post_param(&self, url: Url, key: &str, value: &str) -> Result<Contact> {
        debug!("POST {}", url);
        let rsp = self.client.post(url)
            .query(&[(key, value)])
            .header("Accept", "application/json")
            .send()
            .await?;

        let rsp = check_status(rsp).await?;
        rsp.json::<Contact>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })
    }
}

async fn check_status(rsp: Response) -> Result<Response> {
    let status = rsp.status();
    if status.is_success() {
        return Ok(rsp);
    }

    let body = rsp.text().await.unwrap_or_default();
    let msg = match body.trim() {
        "" => status.canonical_reason().unwrap_or("invalid http response").to_string(),
        v => v.to_string(),
    };
    Err(Error::Status(status.as_u16(), msg))
}

#[async_trait]
impl ContactService for APIClient {
    async fn contacts(&self) -> Result<Vec<Contact>> {
        self.fetch_list(self.contacts_url()?).await
    }

    async fn contact(&self, id: ContactId) -> Result<Option<Contact>> {
        let url = self.contact_url(id)?;
        debug!("GET {}", url);
        let rsp = self.client.get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if rsp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let rsp = check_status(rsp).await?;
        let data = rsp.json::<Contact>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })?;
        Ok(Some(data))
    }

    async fn create_contact(&self, contact: &Contact) -> Result<Contact> {
        if contact.id().is_some() {
            return Err(Error::Argument(format!("Contact to create must not carry an id")));
        }

        let url = self.contacts_url()?;
        debug!("POST {}", url);
        let rsp = self.client.post(url)
            .json(contact)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let rsp = check_status(rsp).await?;
        rsp.json::<Contact>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })
    }

    async fn update_contact(&self, id: ContactId, contact: &Contact) -> Result<()> {
        let url = self.contact_url(id)?;
        debug!("PUT {}", url);
        let rsp = self.client.put(url)
            .json(contact)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        check_status(rsp).await.map(|_| ())
    }

    async fn delete_contact(&self, id: ContactId) -> Result<()> {
        let url = self.contact_url(id)?;
        debug!("DELETE {}", url);
        let rsp = self.client.delete(url)
            .send()
            .await?;

        check_status(rsp).await.map(|_| ())
    }

    async fn update_favorite(&self, id: ContactId, favorite: bool) -> Result<()> {
        let url = self.contact_child_url(id, "favorite")?;
        debug!("PUT {} favorite={}", url, favorite);
        let rsp = self.client.put(url)
            .query(&[("favorite", favorite)])
            .send()
            .await?;

        check_status(rsp).await.map(|_| ())
    }

    async fn favorites(&self) -> Result<Vec<Contact>> {
        self.fetch_list(self.collection_child_url("favorites")?).await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Contact>> {
        let mut url = self.collection_child_url("search")?;
        url.query_pairs_mut().append_pair("keyword", keyword);
        self.fetch_list(url).await
    }

    async fn add_name(&self, id: ContactId, name: &str) -> Result<Contact> {
        self.post_param(self.contact_child_url(id, "names")?, "name", name).await
    }

    async fn add_phone_number(&self, id: ContactId, phone: &str) -> Result<Contact> {
        self.post_param(self.contact_child_url(id, "phones")?, "phoneNumber", phone).await
    }

    async fn export_contacts(&self) -> Result<Vec<u8>> {
        let url = self.collection_child_url("export")?;
        debug!("GET {}", url);
        let rsp = self.client.get(url)
            .send()
            .await?;

        let rsp = check_status(rsp).await?;
        let bytes = rsp.bytes().await.map_err(|e| {
            Error::Network(format!("Http error: reading response body error {e}"))
        })?;
        Ok(bytes.to_vec())
    }

    async fn import_contacts(&self, file_name: &str, data: Vec<u8>) -> Result<()> {
        let part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(SPREADSHEET_MIME)?;
        let form = Form::new().part("file", part);

        let url = self.collection_child_url("import")?;
        debug!("POST {} file={}", url, file_name);
        let rsp = self.client.post(url)
            .multipart(form)
            .send()
            .await?;

        check_status(rsp).await.map(|_| ())
    }
}
