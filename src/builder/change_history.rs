//! Change History (MIX chapter 10).

use super::{append_sorted, leaf, leaves, plain_container};
use crate::error::Result;
use crate::model::Element;
use crate::vocab::{CHANGE_HISTORY_ORDER, IMAGE_PROCESSING_ORDER};

/// `ChangeHistory`, children sorted as ImageProcessing, PreviousImageMetadata.
pub fn change_history(children: Vec<Element>) -> Result<Element> {
    let mut container = Element::new("ChangeHistory");
    append_sorted(
        &mut container,
        "ChangeHistory",
        CHANGE_HISTORY_ORDER,
        children,
    )?;
    Ok(container)
}

/// Content of an `ImageProcessing` element.
#[derive(Debug, Clone, Default)]
pub struct ImageProcessing<'a> {
    pub date_time: Option<&'a str>,
    pub source_data: Option<&'a str>,
    pub agencies: &'a [&'a str],
    pub rationale: Option<&'a str>,
    pub actions: &'a [&'a str],
}

/// `ImageProcessing`. Leaves and `ProcessingSoftware` children are sorted as
/// dateTimeProcessed, sourceData, processingAgency, processingRationale,
/// ProcessingSoftware, processingActions.
///
/// ```
/// use nisomix::builder::change_history::{image_processing, processing_software, ImageProcessing};
///
/// let software = processing_software(Some("foo"), None, None, None);
/// let elem = image_processing(
///     &ImageProcessing {
///         date_time: Some("2020-01-01"),
///         actions: &["rotate", "crop"],
///         ..Default::default()
///     },
///     vec![software],
/// )?;
/// assert_eq!(
///     elem.child_names(),
///     vec!["dateTimeProcessed", "ProcessingSoftware", "processingActions", "processingActions"]
/// );
/// # Ok::<(), nisomix::error::MixError>(())
/// ```
pub fn image_processing(
    processing: &ImageProcessing<'_>,
    children: Vec<Element>,
) -> Result<Element> {
    let mut container = Element::new("ImageProcessing");
    leaf(&mut container, "dateTimeProcessed", processing.date_time);
    leaf(&mut container, "sourceData", processing.source_data);
    leaves(&mut container, "processingAgency", processing.agencies);
    leaf(&mut container, "processingRationale", processing.rationale);
    leaves(&mut container, "processingActions", processing.actions);
    append_sorted(
        &mut container,
        "ImageProcessing",
        IMAGE_PROCESSING_ORDER,
        children,
    )?;
    Ok(container)
}

/// `ProcessingSoftware{processingSoftwareName, processingSoftwareVersion,
/// processingOperatingSystemName, processingOperatingSystemVersion}`.
pub fn processing_software(
    name: Option<&str>,
    version: Option<&str>,
    os_name: Option<&str>,
    os_version: Option<&str>,
) -> Element {
    let mut container = Element::new("ProcessingSoftware");
    leaf(&mut container, "processingSoftwareName", name);
    leaf(&mut container, "processingSoftwareVersion", version);
    leaf(&mut container, "processingOperatingSystemName", os_name);
    leaf(&mut container, "processingOperatingSystemVersion", os_version);
    container
}

/// `PreviousImageMetadata`; the previous MIX record is appended as given.
pub fn previous_image_metadata(children: Vec<Element>) -> Element {
    plain_container("PreviousImageMetadata", children)
}
