use folio_core_contact_impl::ContactServiceImpl;
use folio_extern_impl::relay::RelayApiServiceImpl;
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<Contact, RelayApi, Templates>;

// Core
pub type Contact = ContactServiceImpl<RelayApi>;

// Extern
pub type RelayApi = RelayApiServiceImpl;

// Templates
pub type Templates = TemplateServiceImpl;
