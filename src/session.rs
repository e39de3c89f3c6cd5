//! Calculator session: the last computed block and the address pager.
//!
//! Views read the block the session owns instead of a process-wide "last
//! result". A failed calculation leaves the previous block in place.

use crate::config::Limits;
use crate::error::{CalcError, ExportError};
use crate::models::NetworkBlock;
use crate::output::{self, ExportTarget};
use crate::processing::{
    address_page, bit_breakdown, enumerate_subnets, export_addresses, AddressExport, AddressView,
    BitRow, SubnetListing,
};

/// Page position within the address view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPager {
    pub page_size: usize,
    pub page: i64,
}

impl AddressPager {
    pub fn new(page_size: usize) -> Self {
        AddressPager {
            page_size: page_size.max(1),
            page: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    limits: Limits,
    block: Option<NetworkBlock>,
    pager: AddressPager,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Limits::default())
    }
}

impl Session {
    pub fn new(limits: Limits) -> Self {
        Session {
            limits,
            block: None,
            pager: AddressPager::new(limits.page_size),
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn block(&self) -> Option<&NetworkBlock> {
        self.block.as_ref()
    }

    pub fn pager(&self) -> AddressPager {
        self.pager
    }

    fn current(&self) -> Result<&NetworkBlock, CalcError> {
        self.block.as_ref().ok_or(CalcError::NotCalculated)
    }

    /// Compute a new block, replacing the current one on success.
    pub fn calculate(&mut self, address: &str, prefix: &str) -> Result<&NetworkBlock, CalcError> {
        let block = NetworkBlock::compute(address, prefix).map_err(|e| {
            log::warn!("calculation rejected: {e}");
            e
        })?;
        log::info!("calculated {} from {}", block.cidr(), block.input());
        self.pager.page = 0;
        Ok(&*self.block.insert(block))
    }

    /// Forget the block and restore the default page size.
    pub fn reset(&mut self) {
        self.block = None;
        self.pager = AddressPager::new(self.limits.page_size);
    }

    pub fn subnets(&self, target: &str) -> Result<SubnetListing, CalcError> {
        enumerate_subnets(self.current()?, target, self.limits.subnet_rows)
    }

    /// Show page `page`; the stored position is the clamped one.
    pub fn address_page(&mut self, page: i64) -> Result<AddressView, CalcError> {
        let view = address_page(
            self.current()?,
            self.pager.page_size,
            page,
            self.limits.paged_addresses,
        );
        if let AddressView::Page(p) = &view {
            self.pager.page = p.page as i64;
        }
        Ok(view)
    }

    pub fn current_page(&mut self) -> Result<AddressView, CalcError> {
        self.address_page(self.pager.page)
    }

    pub fn next_page(&mut self) -> Result<AddressView, CalcError> {
        self.address_page(self.pager.page + 1)
    }

    pub fn prev_page(&mut self) -> Result<AddressView, CalcError> {
        self.address_page(self.pager.page - 1)
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<AddressView, CalcError> {
        self.pager = AddressPager::new(page_size);
        self.address_page(0)
    }

    pub fn export(&self) -> Result<AddressExport, CalcError> {
        Ok(export_addresses(self.current()?, self.limits.csv_rows))
    }

    pub fn bits(&self) -> Result<Vec<BitRow>, CalcError> {
        Ok(bit_breakdown(self.current()?))
    }

    pub fn copy_text(&self, target: &mut dyn ExportTarget) -> Result<(), ExportError> {
        let summary = self.current()?.summary();
        target.copy_text(&output::render_text(&summary))
    }

    pub fn copy_json(&self, target: &mut dyn ExportTarget) -> Result<(), ExportError> {
        let summary = self.current()?.summary();
        target.copy_json(&output::summary_json(&summary)?)
    }

    /// Export the address list as CSV and hand it over for download.
    pub fn download_csv(&self, target: &mut dyn ExportTarget) -> Result<String, ExportError> {
        let block = self.current()?;
        let csv = output::render_csv(&self.export()?);
        let filename = output::csv_filename(block);
        target.download(&filename, output::CSV_MIME, csv.as_bytes())?;
        Ok(filename)
    }
}
