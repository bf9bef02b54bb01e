use inspector_application::inspection_service::InspectionServiceImplParameters;
use inspector_application::InspectionServiceImpl;
use inspector_infrastructure::{
    ParquetFileSource, ParquetFileSourceParameters, DEFAULT_BATCH_SIZE,
};
use shaku::module;

module! {
    pub InspectorModule {
        components = [
            InspectionServiceImpl,
            ParquetFileSource
        ],
        providers = []
    }
}

pub fn create_inspector_module() -> InspectorModule {
    InspectorModule::builder()
        .with_component_parameters::<ParquetFileSource>(ParquetFileSourceParameters {
            batch_size: DEFAULT_BATCH_SIZE,
        })
        .with_component_parameters::<InspectionServiceImpl>(InspectionServiceImplParameters {})
        .build()
}
