pub mod cli;
mod run;
mod run_audit_request;
mod run_contact_form;
mod run_manage_leads;
mod run_quick_chat;
mod run_server;
mod show_lead_stats;
